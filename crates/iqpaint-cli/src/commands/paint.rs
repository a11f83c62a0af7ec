//! Paint command implementation
//!
//! Resolves params, reports the derived render values, then synthesizes the
//! IQ stream and writes it as headerless cf32.

use anyhow::{Context, Result};
use colored::Colorize;
use iqpaint_backend_iq::cf32::{compute_iq_hash, write_cf32_file};
use iqpaint_backend_iq::rng::rng_for;
use iqpaint_backend_iq::{render, IqError, RenderConfig};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    input_error_to_json, iq_error_to_json, validation_warning_to_json, Diagnostics, JsonWarning,
    PaintOutput, PaintResult,
};
use super::{emit_json, reporting, EXIT_CONFIG, EXIT_GENERATION};
use crate::cli_args::PaintArgs;
use crate::input::{resolve_params, ResolvedParams};

/// Run the paint command
///
/// # Arguments
/// * `args` - Paint parameters from flags and `--params`
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 on configuration errors, 2 on generation or I/O errors
pub fn run(args: &PaintArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run paint with human-readable (colored) output
fn run_human(args: &PaintArgs) -> Result<ExitCode> {
    let start = Instant::now();

    let ResolvedParams { params, .. } =
        resolve_params(args).context("Failed to resolve paint params")?;

    println!("{} {:?}", "Painting:".cyan().bold(), params.text);

    let config = match RenderConfig::from_params(&params) {
        Ok(config) => config,
        Err(IqError::InvalidParams(errors)) => {
            reporting::print_errors(&errors);
            println!(
                "\n{} Params have {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
        Err(e) => return Err(e.into()),
    };

    reporting::print_diagnostics(&Diagnostics::new(&params, &config));
    reporting::print_warnings(&config.warnings());

    let mut rng = rng_for(params.seed);
    let output_path = Path::new(&params.output);
    let outcome = render(&config, &mut rng).and_then(|samples| {
        let bytes = write_cf32_file(output_path, &samples)?;
        Ok((samples, bytes))
    });

    let (samples, bytes) = match outcome {
        Ok(written) => written,
        Err(e) => {
            println!("\n{}", "Errors:".red().bold());
            for error in iq_error_to_json(&e) {
                reporting::print_error(&error.code, &error.message);
            }
            println!("\n{} Nothing written to {}", "FAILED".red().bold(), params.output);
            return Ok(ExitCode::from(EXIT_GENERATION));
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;

    println!(
        "\n{} Wrote {} samples ({} bytes) to {} ({}ms)",
        "SUCCESS".green().bold(),
        samples.len(),
        bytes,
        params.output,
        duration_ms
    );
    println!("{} {}", "IQ hash:".dimmed(), compute_iq_hash(&samples));

    Ok(ExitCode::SUCCESS)
}

/// Run paint with machine-readable JSON output
fn run_json(args: &PaintArgs) -> Result<ExitCode> {
    let start = Instant::now();

    let ResolvedParams {
        params,
        source_hash,
    } = match resolve_params(args) {
        Ok(resolved) => resolved,
        Err(e) => {
            let output = PaintOutput::failure(vec![input_error_to_json(&e)], vec![], None, None);
            emit_json(&output)?;
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let config = match RenderConfig::from_params(&params) {
        Ok(config) => config,
        Err(e) => {
            let output = PaintOutput::failure(iq_error_to_json(&e), vec![], None, source_hash);
            emit_json(&output)?;
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let diagnostics = Diagnostics::new(&params, &config);
    let warnings: Vec<JsonWarning> = config
        .warnings()
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let mut rng = rng_for(params.seed);
    let output_path = Path::new(&params.output);
    let outcome = render(&config, &mut rng).and_then(|samples| {
        let bytes = write_cf32_file(output_path, &samples)?;
        Ok((samples, bytes))
    });

    match outcome {
        Ok((samples, bytes)) => {
            let result = PaintResult {
                output: params.output.clone(),
                samples: samples.len(),
                bytes,
                iq_hash: compute_iq_hash(&samples),
                duration_ms: start.elapsed().as_millis() as u64,
            };
            emit_json(&PaintOutput::success(
                diagnostics,
                result,
                warnings,
                source_hash,
            ))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let output =
                PaintOutput::failure(iq_error_to_json(&e), warnings, Some(diagnostics), source_hash);
            emit_json(&output)?;
            Ok(ExitCode::from(EXIT_GENERATION))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(text: &str, sample_rate: u64, output: &Path) -> PaintArgs {
        PaintArgs {
            text: Some(text.to_string()),
            sample_rate: Some(sample_rate),
            filename: Some(output.to_string_lossy().into_owned()),
            seed: Some(42),
            ..PaintArgs::default()
        }
    }

    #[test]
    fn paint_writes_expected_length() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("a.cfile");

        let code = run(&args_for("A", 48_000, &out), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(std::fs::metadata(&out).unwrap().len(), 382_464);
    }

    #[test]
    fn paint_json_writes_expected_length() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("a.cfile");

        let code = run(&args_for("A", 48_000, &out), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(std::fs::metadata(&out).unwrap().len(), 382_464);
    }

    #[test]
    fn paint_empty_text_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("empty.cfile");

        for json in [false, true] {
            let code = run(&args_for("", 48_000, &out), json).unwrap();
            assert_eq!(code, ExitCode::from(EXIT_CONFIG));
            assert!(!out.exists());
        }
    }

    #[test]
    fn paint_missing_sample_rate() {
        let args = PaintArgs {
            text: Some("A".to_string()),
            ..PaintArgs::default()
        };
        assert!(run(&args, false).is_err());
        assert_eq!(run(&args, true).unwrap(), ExitCode::from(EXIT_CONFIG));
    }

    #[test]
    fn paint_unwritable_output_is_generation_error() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("missing").join("a.cfile");

        let code = run(&args_for("A", 8_000, &out), false).unwrap();
        assert_eq!(code, ExitCode::from(EXIT_GENERATION));
        assert!(!out.exists());
    }
}
