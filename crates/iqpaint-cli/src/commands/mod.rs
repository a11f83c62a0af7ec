//! CLI command implementations

pub mod json_output;
pub mod paint;
pub mod preview;
pub mod validate;

mod reporting;

use anyhow::{Context, Result};
use serde::Serialize;

/// Exit code for configuration and validation errors.
pub const EXIT_CONFIG: u8 = 1;

/// Exit code for generation and I/O errors.
pub const EXIT_GENERATION: u8 = 2;

/// Prints a JSON output document to stdout.
pub(crate) fn emit_json<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
