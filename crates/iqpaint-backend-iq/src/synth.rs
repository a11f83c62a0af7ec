//! Line synthesis: one raster row to repeated time-domain symbols.
//!
//! Each row is read as a magnitude spectrum. Every repetition draws fresh phase
//! noise for every bin, so repeated symbols are never identical and must not be
//! cached.

use std::sync::Arc;

use rand::Rng;
use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftPlanner};

use crate::error::{IqError, IqResult};
use crate::noise::phase_noise;

/// Inverse-transform synthesizer for rows of a fixed length.
pub struct LineSynthesizer {
    ifft: Arc<dyn Fft<f32>>,
    spectrum: Vec<Complex32>,
    scratch: Vec<Complex32>,
    scale: f32,
}

impl LineSynthesizer {
    /// Plans the inverse transform for rows of `row_len` values.
    pub fn new(row_len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let ifft = planner.plan_fft_inverse(row_len);
        let scratch = vec![Complex32::new(0.0, 0.0); ifft.get_inplace_scratch_len()];

        Self {
            ifft,
            spectrum: vec![Complex32::new(0.0, 0.0); row_len],
            scratch,
            scale: 1.0 / row_len.max(1) as f32,
        }
    }

    /// Transform length.
    pub fn row_len(&self) -> usize {
        self.spectrum.len()
    }

    /// Appends `repeats` symbols of `row.len()` samples each to `out`.
    ///
    /// Spectrum bin `k` takes row value `(row_len / 2 + k) % row_len`, moving the
    /// row's middle to DC. The inverse transform output is scaled by `1 / row_len`.
    pub fn synthesize_row<R: Rng + ?Sized>(
        &mut self,
        row: &[f32],
        repeats: usize,
        rng: &mut R,
        out: &mut Vec<Complex32>,
    ) -> IqResult<()> {
        let n = self.row_len();
        if row.len() != n {
            return Err(IqError::RowLength {
                expected: n,
                found: row.len(),
            });
        }

        let center = n / 2;
        out.reserve(n * repeats);

        for _ in 0..repeats {
            for (k, bin) in self.spectrum.iter_mut().enumerate() {
                let p = (center + k) % n;
                *bin = phase_noise(rng) * row[p];
            }

            self.ifft
                .process_with_scratch(&mut self.spectrum, &mut self.scratch);

            let scale = self.scale;
            out.extend(self.spectrum.iter().map(|&s| s * scale));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::AMPLITUDE;
    use crate::rng::create_rng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_symbol_length_and_repeats() {
        let mut synth = LineSynthesizer::new(64);
        let mut rng = create_rng(1);
        let mut out = Vec::new();
        let row = vec![AMPLITUDE; 64];

        synth.synthesize_row(&row, 3, &mut rng, &mut out).unwrap();
        assert_eq!(out.len(), 3 * 64);

        synth.synthesize_row(&row, 1, &mut rng, &mut out).unwrap();
        assert_eq!(out.len(), 4 * 64);
    }

    #[test]
    fn test_zero_row_gives_zero_symbol() {
        let mut synth = LineSynthesizer::new(128);
        let mut rng = create_rng(5);
        let mut out = Vec::new();

        synth
            .synthesize_row(&vec![0.0; 128], 2, &mut rng, &mut out)
            .unwrap();
        assert!(out.iter().all(|s| s.re == 0.0 && s.im == 0.0));
    }

    #[test]
    fn test_zero_repeats_emit_nothing() {
        let mut synth = LineSynthesizer::new(64);
        let mut out = Vec::new();
        synth
            .synthesize_row(&vec![AMPLITUDE; 64], 0, &mut create_rng(1), &mut out)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_row_length_mismatch() {
        let mut synth = LineSynthesizer::new(64);
        let mut out = Vec::new();
        let err = synth
            .synthesize_row(&[0.0; 32], 1, &mut create_rng(1), &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            IqError::RowLength {
                expected: 64,
                found: 32
            }
        ));
    }

    #[test]
    fn test_center_bin_becomes_dc() {
        // With zero phase, a lone bin at the row's middle is a constant signal
        let n = 64;
        let mut row = vec![0.0f32; n];
        row[n / 2] = AMPLITUDE;

        let mut synth = LineSynthesizer::new(n);
        let mut out = Vec::new();
        synth
            .synthesize_row(&row, 1, &mut StepRng::new(0, 0), &mut out)
            .unwrap();

        let expected = AMPLITUDE / n as f32;
        for s in &out {
            assert!((s.re - expected).abs() < 1e-7, "re = {}", s.re);
            assert!(s.im.abs() < 1e-7, "im = {}", s.im);
        }
    }

    #[test]
    fn test_forward_transform_recovers_shifted_row() {
        let n = 64;
        let row: Vec<f32> = (0..n)
            .map(|i| if i % 5 == 0 { AMPLITUDE } else { 0.0 })
            .collect();

        let mut synth = LineSynthesizer::new(n);
        let mut out = Vec::new();
        synth
            .synthesize_row(&row, 1, &mut create_rng(11), &mut out)
            .unwrap();

        let mut planner = FftPlanner::<f32>::new();
        planner.plan_fft_forward(n).process(&mut out);

        for (k, bin) in out.iter().enumerate() {
            let expected = row[(n / 2 + k) % n];
            assert!(
                (bin.norm() - expected).abs() < 1e-5,
                "bin {}: {} vs {}",
                k,
                bin.norm(),
                expected
            );
        }
    }

    #[test]
    fn test_repeats_are_not_identical() {
        let row = vec![AMPLITUDE; 64];
        let mut synth = LineSynthesizer::new(64);
        let mut out = Vec::new();
        synth
            .synthesize_row(&row, 2, &mut create_rng(21), &mut out)
            .unwrap();
        assert_ne!(&out[..64], &out[64..]);
    }
}
