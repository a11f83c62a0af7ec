//! Colored console output shared by commands.

use colored::Colorize;
use iqpaint_spec::{ValidationError, ValidationWarning};

use super::json_output::Diagnostics;

/// Prints the derived render values, one labelled line each.
pub(super) fn print_diagnostics(d: &Diagnostics) {
    println!("{} {}", "File output:".cyan().bold(), d.output);
    println!("{} {}", "Orientation:".cyan().bold(), d.orientation);
    println!("{} {:?}", "Text:".cyan().bold(), d.text);
    println!("{} {}", "Text length:".dimmed(), d.text_len);
    println!("{} {}", "Border length:".dimmed(), d.border_length);
    println!("{} {}", "FFT size:".dimmed(), d.fft_size);
    println!("{} {} chars/s", "Print speed:".dimmed(), d.print_speed);
    println!("{} {} sps", "Sample rate:".dimmed(), d.sample_rate);
    println!("{} {}", "Total length:".dimmed(), d.total_length);
    println!("{} {}", "Total height:".dimmed(), d.total_height);
    println!("{} {}", "Raster rows:".dimmed(), d.row_count);
    println!(
        "{} {} dB ({:.6} linear)",
        "Gain:".dimmed(),
        d.gain_db,
        d.gain_linear
    );
    println!("{} {:.9} s", "Sample duration:".dimmed(), d.sample_duration);
    println!("{} ~{} lines/s", "Line rate:".dimmed(), d.lines_per_second);
    println!("{} {:.6} s", "Char duration:".dimmed(), d.char_duration);
    println!(
        "{} {}",
        "Interpolation factor:".cyan().bold(),
        d.interp_factor
    );
    println!(
        "{} {} ({:.3} s)",
        "Samples:".dimmed(),
        d.total_samples,
        d.duration_seconds
    );
    if let Some(seed) = d.seed {
        println!("{} {}", "Seed:".dimmed(), seed);
    }
}

/// Prints validation errors.
pub(super) fn print_errors(errors: &[ValidationError]) {
    if errors.is_empty() {
        return;
    }
    println!("\n{}", "Errors:".red().bold());
    for error in errors {
        let path_info = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path_info.dimmed(),
            error.message
        );
    }
}

/// Prints validation warnings.
pub(super) fn print_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for warning in warnings {
        let path_info = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            path_info.dimmed(),
            warning.message
        );
    }
}

/// Prints a single error with its code.
pub(super) fn print_error(code: &str, message: &str) {
    println!("  {} [{}]: {}", "x".red(), code.red(), message);
}
