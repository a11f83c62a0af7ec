//! Paint request validation.
//!
//! Everything checked here is a configuration error: it is reported before
//! synthesis begins and no output is produced.

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::params::PaintParams;

/// Validates paint params and returns a validation result.
///
/// # Example
/// ```
/// use iqpaint_spec::{validate_params, ErrorCode, PaintParams};
///
/// let result = validate_params(&PaintParams::new("", 48_000));
/// assert!(!result.is_ok());
/// assert_eq!(result.errors[0].code, ErrorCode::EmptyText);
/// ```
pub fn validate_params(params: &PaintParams) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_text(params, &mut result);
    validate_sample_rate(params, &mut result);
    validate_print_speed(params, &mut result);
    validate_gain(params, &mut result);
    validate_output(params, &mut result);

    result
}

fn validate_text(params: &PaintParams, result: &mut ValidationResult) {
    if params.text.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyText,
            "text must contain at least one character",
            "text",
        ));
    }
}

fn validate_sample_rate(params: &PaintParams, result: &mut ValidationResult) {
    if params.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample_rate must be a positive number of samples per second",
            "sample_rate",
        ));
    }
}

fn validate_print_speed(params: &PaintParams, result: &mut ValidationResult) {
    if !params.print_speed.is_finite() || params.print_speed <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPrintSpeed,
            format!(
                "print_speed must be a positive number of characters per second, got {}",
                params.print_speed
            ),
            "print_speed",
        ));
    }
}

fn validate_gain(params: &PaintParams, result: &mut ValidationResult) {
    if !params.gain_db.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidGain,
            format!("gain_db must be finite, got {}", params.gain_db),
            "gain_db",
        ));
    }
}

fn validate_output(params: &PaintParams, result: &mut ValidationResult) {
    if params.output.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyOutputPath,
            "output path must not be empty",
            "output",
        ));
    }
}
