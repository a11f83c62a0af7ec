//! iqpaint Paint Request Library
//!
//! This crate provides the request types and validation shared by the iqpaint
//! backend and command-line interface. A paint request describes a piece of
//! text to be written onto a spectrum-analyzer waterfall as a raw IQ stream.
//!
//! # Overview
//!
//! - **Params**: [`PaintParams`] holds the text, sample rate, print speed, gain,
//!   orientation, output path and optional seed of one render; [`ParamsFile`]
//!   is the partial form read from JSON params files
//! - **Validation**: [`validate_params`] reports configuration errors before any
//!   synthesis begins
//!
//! # Example
//!
//! ```
//! use iqpaint_spec::{validate_params, Orientation, PaintParams};
//!
//! let params = PaintParams::new("HELLO", 48_000)
//!     .with_print_speed(2.0)
//!     .with_orientation(Orientation::Vertical)
//!     .with_seed(42);
//!
//! let result = validate_params(&params);
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`params`]: Paint request types
//! - [`validation`]: Request validation functions

pub mod error;
pub mod params;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use params::{Orientation, PaintParams, ParamsFile, DEFAULT_OUTPUT, DEFAULT_PRINT_SPEED};
pub use validation::validate_params;
