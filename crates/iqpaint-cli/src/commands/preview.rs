//! Preview command implementation
//!
//! Prints the raster buffer one row per line, in emission order. Each line
//! is one waterfall time step with frequency running left to right.

use anyhow::{Context, Result};
use colored::Colorize;
use iqpaint_backend_iq::{RasterBuffer, RasterLayout};
use iqpaint_spec::{ErrorCode, Orientation};
use std::process::ExitCode;

use super::{reporting, EXIT_CONFIG};
use crate::cli_args::PaintArgs;
use crate::input::resolve_text;

const LIT: char = '#';
const UNLIT: char = '.';

/// Run the preview command
///
/// # Returns
/// Exit code: 0 success, 1 if there is no text to preview
pub fn run(args: &PaintArgs) -> Result<ExitCode> {
    let (text, orientation) = resolve_text(args).context("Failed to resolve paint params")?;

    if text.is_empty() {
        reporting::print_error(ErrorCode::EmptyText.code(), "text is empty");
        return Ok(ExitCode::from(EXIT_CONFIG));
    }

    let raster = build_raster(&text, orientation);

    println!(
        "{} {:?} ({}, {} rows x {} bins)",
        "Preview:".cyan().bold(),
        text,
        orientation,
        raster.row_count(),
        raster.row_len()
    );
    for line in render_rows(&raster) {
        println!("{}", line);
    }

    Ok(ExitCode::SUCCESS)
}

fn build_raster(text: &str, orientation: Orientation) -> RasterBuffer {
    let layout = RasterLayout::new(text.len(), orientation);
    RasterBuffer::build(text.as_bytes(), &layout)
}

/// Renders every raster row as a line of lit and unlit cells.
pub fn render_rows(raster: &RasterBuffer) -> Vec<String> {
    raster
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| if v != 0.0 { LIT } else { UNLIT })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_lines_match_raster_shape() {
        let raster = build_raster("HI", Orientation::Horizontal);
        let lines = render_rows(&raster);
        assert_eq!(lines.len(), 18);
        assert!(lines.iter().all(|l| l.chars().count() == 64));
        assert!(lines.iter().any(|l| l.contains(LIT)));
    }

    #[test]
    fn preview_blank_text_is_unlit() {
        let raster = build_raster("  ", Orientation::Vertical);
        let lines = render_rows(&raster);
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|l| !l.contains(LIT)));
    }

    #[test]
    fn preview_empty_text_fails() {
        let args = PaintArgs {
            text: Some(String::new()),
            ..PaintArgs::default()
        };
        assert_eq!(run(&args).unwrap(), ExitCode::from(EXIT_CONFIG));
    }
}
