//! Error types for the IQ backend.

use iqpaint_spec::{BackendError, ValidationError};
use thiserror::Error;

/// Result type for IQ backend operations.
pub type IqResult<T> = Result<T, IqError>;

/// Errors that can occur while painting an IQ stream.
#[derive(Debug, Error)]
pub enum IqError {
    /// Params failed validation.
    #[error("invalid paint params: {}", join_errors(.0))]
    InvalidParams(Vec<ValidationError>),

    /// A raster row did not match the transform length.
    #[error("raster row length {found} does not match transform length {expected}")]
    RowLength {
        /// Transform length.
        expected: usize,
        /// Row length found.
        found: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl BackendError for IqError {
    fn code(&self) -> &'static str {
        match self {
            IqError::InvalidParams(_) => "IQ_001",
            IqError::RowLength { .. } => "IQ_002",
            IqError::Io(_) => "IQ_003",
        }
    }

    fn category(&self) -> &'static str {
        "iq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqpaint_spec::ErrorCode;

    #[test]
    fn test_invalid_params_lists_every_error() {
        let err = IqError::InvalidParams(vec![
            ValidationError::with_path(ErrorCode::EmptyText, "text is empty", "text"),
            ValidationError::new(ErrorCode::InvalidSampleRate, "rate is zero"),
        ]);
        let message = err.to_string();
        assert!(message.contains("E001"));
        assert!(message.contains("rate is zero"));
        assert_eq!(err.code(), "IQ_001");
    }

    #[test]
    fn test_io_error_code() {
        let err = IqError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.code(), "IQ_003");
        assert_eq!(err.category(), "iq");
        assert!(err.message().contains("disk full"));
    }
}
