//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `paint` and `validate`, so scripts can drive iqpaint without scraping the
//! colored human output.

use iqpaint_backend_iq::{IqError, RenderConfig};
use iqpaint_spec::{BackendError, PaintParams, ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors, or passes through validation error codes.
pub mod error_codes {
    /// Params file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Params file JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// No text given
    pub const MISSING_TEXT: &str = "CLI_003";
    /// No sample rate given
    pub const MISSING_SAMPLE_RATE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "IQ_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Params field the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the params field for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Params field the warning refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Converts an input error to JSON.
pub fn input_error_to_json(error: &InputError) -> JsonError {
    let json = JsonError::new(error.code(), error.to_string());
    match error.path() {
        Some(path) => json.with_path(path),
        None => json,
    }
}

/// Converts a validation error to JSON.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    JsonError {
        code: error.code.to_string(),
        message: error.message.clone(),
        path: error.path.clone(),
    }
}

/// Converts a validation warning to JSON.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warning.code.to_string(),
        message: warning.message.clone(),
        path: warning.path.clone(),
    }
}

/// Converts a backend error to JSON. Invalid params expand to one entry per
/// validation error.
pub fn iq_error_to_json(error: &IqError) -> Vec<JsonError> {
    match error {
        IqError::InvalidParams(errors) => errors.iter().map(validation_error_to_json).collect(),
        other => vec![JsonError::new(other.code(), other.message())],
    }
}

/// Derived render values reported before any output is produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diagnostics {
    /// Output file path
    pub output: String,
    /// "horizontal" or "vertical"
    pub orientation: String,
    /// Text as given
    pub text: String,
    /// Number of glyphs painted (UTF-8 bytes)
    pub text_len: usize,
    /// Empty bins before the painted region of each row
    pub border_length: usize,
    /// Transform size, equal to the raster row length
    pub fft_size: usize,
    /// Requested print speed in characters per second
    pub print_speed: f64,
    /// Sample rate in samples per second
    pub sample_rate: u64,
    /// Width of the painted frequency axis in bins
    pub total_length: usize,
    /// Rows spent on one character
    pub total_height: usize,
    /// Raster rows, one per emitted symbol
    pub row_count: usize,
    /// Gain in dB
    pub gain_db: f64,
    /// Gain as a linear factor
    pub gain_linear: f32,
    /// Seconds per sample
    pub sample_duration: f64,
    /// Approximate symbols per second
    pub lines_per_second: u64,
    /// Seconds per character
    pub char_duration: f64,
    /// Repetitions of each symbol
    pub interp_factor: usize,
    /// Complex samples in the stream
    pub total_samples: usize,
    /// Stream duration in seconds
    pub duration_seconds: f64,
    /// Noise seed, if reproducible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Diagnostics {
    /// Collects diagnostics for a render.
    pub fn new(params: &PaintParams, config: &RenderConfig) -> Self {
        Self {
            output: params.output.clone(),
            orientation: params.orientation.as_str().to_string(),
            text: params.text.clone(),
            text_len: config.text.len(),
            border_length: config.layout.border_length,
            fft_size: config.layout.row_len,
            print_speed: config.print_speed,
            sample_rate: config.sample_rate,
            total_length: config.layout.row_len,
            total_height: config.layout.glyph_extent,
            row_count: config.layout.row_count,
            gain_db: config.gain_db,
            gain_linear: config.gain_linear,
            sample_duration: config.timing.sample_duration,
            lines_per_second: config.timing.lines_per_second,
            char_duration: config.timing.char_duration,
            interp_factor: config.timing.interp_factor,
            total_samples: config.total_samples(),
            duration_seconds: config.duration_seconds(),
            seed: params.seed,
        }
    }
}

/// Result block of a successful paint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaintResult {
    /// Output file path
    pub output: String,
    /// Complex samples written
    pub samples: usize,
    /// Bytes written
    pub bytes: u64,
    /// BLAKE3 hash of the cf32 payload
    pub iq_hash: String,
    /// Wall-clock time for the whole run
    pub duration_ms: u64,
}

/// JSON output for the `paint` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintOutput {
    /// Whether painting succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings for degraded configurations
    pub warnings: Vec<JsonWarning>,
    /// Derived render values (once params resolved)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
    /// Paint result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PaintResult>,
    /// BLAKE3 hash of the params file, if one was loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl PaintOutput {
    /// Creates a successful paint output.
    pub fn success(
        diagnostics: Diagnostics,
        result: PaintResult,
        warnings: Vec<JsonWarning>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            diagnostics: Some(diagnostics),
            result: Some(result),
            source_hash,
        }
    }

    /// Creates a failed paint output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        diagnostics: Option<Diagnostics>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            diagnostics,
            result: None,
            source_hash,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Derived render values (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
    /// Resolved params (once text and sample rate are known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<PaintParams>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqpaint_spec::{ErrorCode, Orientation, WarningCode};

    #[test]
    fn test_error_omits_missing_path() {
        let json = serde_json::to_value(JsonError::new("CLI_003", "no text")).unwrap();
        assert_eq!(json["code"], "CLI_003");
        assert!(json.get("path").is_none());
    }

    #[test]
    fn test_validation_conversions_keep_codes() {
        let error = ValidationError::with_path(ErrorCode::EmptyText, "text is empty", "text");
        let json = validation_error_to_json(&error);
        assert_eq!(json.code, "E001");
        assert_eq!(json.path.as_deref(), Some("text"));

        let warning = ValidationWarning::new(WarningCode::MissingGlyphs, "no glyph");
        assert_eq!(validation_warning_to_json(&warning).code, "W002");
    }

    #[test]
    fn test_invalid_params_expand() {
        let error = IqError::InvalidParams(vec![
            ValidationError::new(ErrorCode::EmptyText, "a"),
            ValidationError::new(ErrorCode::InvalidSampleRate, "b"),
        ]);
        let codes: Vec<String> = iq_error_to_json(&error).into_iter().map(|e| e.code).collect();
        assert_eq!(codes, vec!["E001", "E002"]);

        let io = IqError::Io(std::io::Error::new(std::io::ErrorKind::Other, "full"));
        assert_eq!(iq_error_to_json(&io)[0].code, "IQ_003");
    }

    #[test]
    fn test_diagnostics_for_single_char() {
        let params = PaintParams::new("A", 48_000);
        let config = RenderConfig::from_params(&params).unwrap();
        let diagnostics = Diagnostics::new(&params, &config);

        assert_eq!(diagnostics.orientation, "horizontal");
        assert_eq!(diagnostics.border_length, 24);
        assert_eq!(diagnostics.fft_size, 64);
        assert_eq!(diagnostics.total_length, 64);
        assert_eq!(diagnostics.total_height, 9);
        assert_eq!(diagnostics.row_count, 9);
        assert_eq!(diagnostics.interp_factor, 83);
        assert_eq!(diagnostics.lines_per_second, 750);
        assert_eq!(diagnostics.total_samples, 47_808);
        assert!(serde_json::to_value(&diagnostics).unwrap().get("seed").is_none());
    }

    #[test]
    fn test_diagnostics_for_vertical_text() {
        let params = PaintParams::new("OK", 96_000).with_orientation(Orientation::Vertical);
        let config = RenderConfig::from_params(&params).unwrap();
        let diagnostics = Diagnostics::new(&params, &config);

        assert_eq!(diagnostics.total_length, 64);
        assert_eq!(diagnostics.total_length, diagnostics.fft_size);
        assert_eq!(diagnostics.total_height, 16);
        assert_eq!(diagnostics.row_count, 16);
        assert_eq!(diagnostics.interp_factor, 93);
    }
}
