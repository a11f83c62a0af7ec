//! Phase and background noise sources.

use std::f32::consts::TAU;

use rand::Rng;
use rustfft::num_complex::Complex32;

use crate::font::AMPLITUDE;

/// Magnitude of every phase-noise value, `exp(0)`.
const PHASE_NOISE_MAGNITUDE: f32 = 1.0;

/// Scale of the additive background noise.
pub const BACKGROUND_NOISE_SCALE: f32 = AMPLITUDE / 15.0;

/// Returns a unit-magnitude complex value with uniformly random phase in `[0, 2π)`.
///
/// Multiplying every frequency bin by a fresh value spreads each symbol's
/// energy over time instead of concentrating it in a single peak.
pub fn phase_noise<R: Rng + ?Sized>(rng: &mut R) -> Complex32 {
    let theta = rng.gen::<f32>() * TAU;
    Complex32::from_polar(PHASE_NOISE_MAGNITUDE, theta)
}

/// Returns one background noise value for the real component.
///
/// Drawn as `(u - 1) * AMPLITUDE / 15` with `u` uniform in `[0, 1)`, so it lies
/// in `(-AMPLITUDE / 15, 0]` and is not zero-mean.
pub fn background_noise<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.gen::<f32>() - 1.0) * BACKGROUND_NOISE_SCALE
}
