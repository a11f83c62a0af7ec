//! End-to-end pipeline integration tests.

use std::fs;

use iqpaint_backend_iq::cf32::{samples_to_cf32_bytes, BYTES_PER_SAMPLE};
use iqpaint_backend_iq::noise::BACKGROUND_NOISE_SCALE;
use iqpaint_backend_iq::{generate, generate_with_rng, IqError, RasterBuffer, RenderConfig};
use iqpaint_spec::{ErrorCode, Orientation, PaintParams, WarningCode};
use rand::rngs::mock::StepRng;

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_single_char_horizontal_at_48k() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.cfile");

    let params = PaintParams::new("A", 48_000).with_seed(42);
    let result = generate(&params).unwrap();

    let config = &result.config;
    assert_eq!(config.layout.border_length, 24);
    assert_eq!(config.layout.row_len, 64);
    assert_eq!(config.layout.row_count, 9);
    assert_eq!(config.timing.interp_factor, 83);

    let expected_samples = 9 * 83 * 64;
    assert_eq!(result.num_samples(), expected_samples);

    let written = result.write_to(&path).unwrap();
    assert_eq!(written, (expected_samples * BYTES_PER_SAMPLE) as u64);
    assert_eq!(fs::metadata(&path).unwrap().len(), 382_464);
}

#[test]
fn test_empty_text_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.cfile");

    let params = PaintParams::new("", 48_000).with_output(path.to_string_lossy());
    match generate(&params) {
        Err(IqError::InvalidParams(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, ErrorCode::EmptyText);
        }
        other => panic!("expected InvalidParams, got {:?}", other.map(|r| r.num_samples())),
    }
    assert!(!path.exists());
}

#[test]
fn test_zero_sample_rate_is_a_config_error() {
    let err = generate(&PaintParams::new("A", 0)).unwrap_err();
    match err {
        IqError::InvalidParams(errors) => {
            assert_eq!(errors[0].code, ErrorCode::InvalidSampleRate)
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_degraded_configuration_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.cfile");

    let result = generate(&PaintParams::new("AB", 200).with_seed(1)).unwrap();
    assert_eq!(result.config.timing.interp_factor, 0);
    assert_eq!(result.warnings[0].code, WarningCode::DegradedInterpolation);

    assert_eq!(result.write_to(&path).unwrap(), 0);
}

// ============================================================================
// Geometry Tests
// ============================================================================

#[test]
fn test_horizontal_width_ignores_text_length() {
    for text in ["A", "HELLO WORLD", "a much longer line of lower case text"] {
        let config = RenderConfig::from_params(&PaintParams::new(text, 48_000)).unwrap();
        assert_eq!(config.layout.row_len, 64);
        assert_eq!(config.layout.row_count, text.len() * 9);
    }
}

#[test]
fn test_vertical_width_is_next_power_of_two() {
    for text in ["A", "HI", "SPECTRUM", "WATERFALL TEXT 123"] {
        let params = PaintParams::new(text, 48_000).with_orientation(Orientation::Vertical);
        let config = RenderConfig::from_params(&params).unwrap();
        assert_eq!(
            config.layout.row_len,
            (16 + text.len() * 9).next_power_of_two()
        );

        let raster = RasterBuffer::build(&config.text, &config.layout);
        assert!(raster
            .rows()
            .iter()
            .all(|row| row.len() == config.layout.row_len));
    }
}

#[test]
fn test_rasterization_is_pure() {
    let config = RenderConfig::from_params(&PaintParams::new("Pure?", 48_000)).unwrap();
    let a = RasterBuffer::build(&config.text, &config.layout);
    let b = RasterBuffer::build(&config.text, &config.layout);
    assert_eq!(a, b);
}

// ============================================================================
// Gain and Determinism Tests
// ============================================================================

#[test]
fn test_gain_scales_samples_tenfold() {
    let base = PaintParams::new("G", 16_000);
    let quiet = generate_with_rng(&base, &mut StepRng::new(0, 0)).unwrap();
    let loud = generate_with_rng(&base.clone().with_gain_db(20.0), &mut StepRng::new(0, 0)).unwrap();

    assert_eq!(quiet.num_samples(), loud.num_samples());
    for (q, l) in quiet.samples.iter().zip(&loud.samples) {
        assert_eq!(l.im, q.im * 10.0);
        let q_clean = q.re + BACKGROUND_NOISE_SCALE;
        let l_clean = l.re + BACKGROUND_NOISE_SCALE;
        assert!((l_clean - q_clean * 10.0).abs() < 1e-6);
    }
}

#[test]
fn test_seeded_output_is_byte_identical() {
    let params = PaintParams::new("SEED", 8_000).with_seed(2024);
    let a = generate(&params).unwrap();
    let b = generate(&params).unwrap();
    assert_eq!(samples_to_cf32_bytes(&a.samples), samples_to_cf32_bytes(&b.samples));
    assert_eq!(a.iq_hash(), b.iq_hash());
}

#[test]
fn test_unseeded_runs_differ() {
    let params = PaintParams::new("X", 8_000);
    let a = generate(&params).unwrap();
    let b = generate(&params).unwrap();
    assert_eq!(a.num_samples(), b.num_samples());
    assert_ne!(a.iq_hash(), b.iq_hash());
}

#[test]
fn test_missing_glyphs_render_blank() {
    let params = PaintParams::new("\u{263a}", 8_000).with_seed(5);
    let result = generate(&params).unwrap();
    assert_eq!(result.warnings[0].code, WarningCode::MissingGlyphs);

    let raster = RasterBuffer::build(&result.config.text, &result.config.layout);
    assert_eq!(raster.lit_count(), 0);
    assert_eq!(raster.row_count(), 3 * 9);
}
