//! RNG construction for the noise sources.
//!
//! Pipeline stages take any [`rand::Rng`]; this module only decides where the
//! generator comes from. A seed gives byte-identical output across runs, no
//! seed draws from OS entropy.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates a PCG32 RNG seeded from OS entropy.
pub fn entropy_rng() -> Pcg32 {
    Pcg32::from_entropy()
}

/// Creates the RNG for a run: seeded if `seed` is given, entropy otherwise.
pub fn rng_for(seed: Option<u32>) -> Pcg32 {
    match seed {
        Some(seed) => create_rng(seed),
        None => entropy_rng(),
    }
}
