//! Post-processing of the assembled IQ stream: gain, then background noise.

use rand::Rng;
use rustfft::num_complex::Complex32;

use crate::config::RenderConfig;
use crate::noise::background_noise;

/// Scales both components of every sample by `gain_linear`.
pub fn apply_gain(samples: &mut [Complex32], gain_linear: f32) {
    for sample in samples.iter_mut() {
        *sample *= gain_linear;
    }
}

/// Adds background noise to the real component of every sample.
///
/// The imaginary component is left untouched.
pub fn add_background_noise<R: Rng + ?Sized>(samples: &mut [Complex32], rng: &mut R) {
    for sample in samples.iter_mut() {
        sample.re += background_noise(rng);
    }
}

/// Applies the configured gain and then background noise, in place.
pub fn post_process<R: Rng + ?Sized>(
    samples: &mut [Complex32],
    config: &RenderConfig,
    rng: &mut R,
) {
    apply_gain(samples, config.gain_linear);
    add_background_noise(samples, rng);
}
