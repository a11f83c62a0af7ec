//! Main entry point for IQ generation.
//!
//! Runs the full pipeline in order: rasterize, synthesize every row, then
//! post-process the whole stream.

use std::path::Path;

use iqpaint_spec::{PaintParams, ValidationWarning};
use rand::Rng;
use rustfft::num_complex::Complex32;

use crate::cf32::{compute_iq_hash, write_cf32_file};
use crate::config::RenderConfig;
use crate::error::IqResult;
use crate::post::post_process;
use crate::raster::RasterBuffer;
use crate::rng::rng_for;
use crate::synth::LineSynthesizer;

/// Result of IQ generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Configuration the stream was rendered with.
    pub config: RenderConfig,
    /// Rendered complex samples.
    pub samples: Vec<Complex32>,
    /// Warnings for degraded configurations.
    pub warnings: Vec<ValidationWarning>,
}

impl GenerateResult {
    /// Number of complex samples.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// BLAKE3 hash of the cf32 payload.
    pub fn iq_hash(&self) -> String {
        compute_iq_hash(&self.samples)
    }

    /// Writes the cf32 payload to `path`, returning the byte count.
    pub fn write_to(&self, path: &Path) -> IqResult<u64> {
        write_cf32_file(path, &self.samples)
    }
}

/// Renders the IQ stream for an already derived configuration.
///
/// Every raster row becomes `interp_factor` symbols in row order; gain and
/// background noise are applied once all rows are synthesized. A zero
/// interpolation factor yields an empty stream without rasterizing.
pub fn render<R: Rng + ?Sized>(config: &RenderConfig, rng: &mut R) -> IqResult<Vec<Complex32>> {
    if config.timing.interp_factor == 0 {
        return Ok(Vec::new());
    }

    let raster = RasterBuffer::build(&config.text, &config.layout);
    let mut synth = LineSynthesizer::new(raster.row_len());
    let mut samples = Vec::with_capacity(config.total_samples());

    for row in raster.rows() {
        synth.synthesize_row(row, config.timing.interp_factor, rng, &mut samples)?;
    }

    post_process(&mut samples, config, rng);

    Ok(samples)
}

/// Generates IQ samples from params.
///
/// Seeded params give byte-identical output across runs; unseeded params draw
/// from OS entropy.
pub fn generate(params: &PaintParams) -> IqResult<GenerateResult> {
    let mut rng = rng_for(params.seed);
    generate_with_rng(params, &mut rng)
}

/// Generates IQ samples from params using the given RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(
    params: &PaintParams,
    rng: &mut R,
) -> IqResult<GenerateResult> {
    let config = RenderConfig::from_params(params)?;
    let warnings = config.warnings();
    let samples = render(&config, rng)?;

    Ok(GenerateResult {
        config,
        samples,
        warnings,
    })
}
