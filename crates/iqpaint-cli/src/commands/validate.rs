//! Validate command implementation
//!
//! Resolves and validates params, then prints the render configuration a
//! paint run would use. Nothing is written.

use anyhow::{Context, Result};
use colored::Colorize;
use iqpaint_backend_iq::{IqError, RenderConfig};
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, iq_error_to_json, validation_warning_to_json, Diagnostics,
    ValidateOutput,
};
use super::{emit_json, reporting, EXIT_CONFIG};
use crate::cli_args::PaintArgs;
use crate::input::resolve_params;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(args: &PaintArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &PaintArgs) -> Result<ExitCode> {
    let resolved = resolve_params(args).context("Failed to resolve paint params")?;
    let params = resolved.params;

    println!("{} {:?}", "Validating:".cyan().bold(), params.text);
    if let Some(hash) = &resolved.source_hash {
        println!("{} {}", "Params file:".dimmed(), &hash[..16]);
    }

    match RenderConfig::from_params(&params) {
        Ok(config) => {
            reporting::print_diagnostics(&Diagnostics::new(&params, &config));
            reporting::print_warnings(&config.warnings());
            println!("\n{} Params are valid", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(IqError::InvalidParams(errors)) => {
            reporting::print_errors(&errors);
            println!(
                "\n{} Params have {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            Ok(ExitCode::from(EXIT_CONFIG))
        }
        Err(e) => Err(e.into()),
    }
}

fn run_json(args: &PaintArgs) -> Result<ExitCode> {
    let params = match resolve_params(args) {
        Ok(resolved) => resolved.params,
        Err(e) => {
            emit_json(&ValidateOutput {
                success: false,
                errors: vec![input_error_to_json(&e)],
                warnings: vec![],
                diagnostics: None,
                params: None,
            })?;
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let output = match RenderConfig::from_params(&params) {
        Ok(config) => ValidateOutput {
            success: true,
            errors: vec![],
            warnings: config
                .warnings()
                .iter()
                .map(validation_warning_to_json)
                .collect(),
            diagnostics: Some(Diagnostics::new(&params, &config)),
            params: Some(params),
        },
        Err(e) => ValidateOutput {
            success: false,
            errors: iq_error_to_json(&e),
            warnings: vec![],
            diagnostics: None,
            params: Some(params),
        },
    };

    emit_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_CONFIG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_good_params_and_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("never.cfile");
        let args = PaintArgs {
            text: Some("OK".to_string()),
            sample_rate: Some(48_000),
            filename: Some(out.to_string_lossy().into_owned()),
            ..PaintArgs::default()
        };

        assert_eq!(run(&args, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(&args, true).unwrap(), ExitCode::SUCCESS);
        assert!(!out.exists());
    }

    #[test]
    fn validate_rejects_bad_print_speed() {
        let args = PaintArgs {
            text: Some("OK".to_string()),
            sample_rate: Some(48_000),
            print_speed: Some(0.0),
            ..PaintArgs::default()
        };

        assert_eq!(run(&args, false).unwrap(), ExitCode::from(EXIT_CONFIG));
        assert_eq!(run(&args, true).unwrap(), ExitCode::from(EXIT_CONFIG));
    }

    #[test]
    fn validate_reads_params_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("paint.json");
        std::fs::write(&path, r#"{"text": "FILE", "sample_rate": 2000000}"#).unwrap();

        let args = PaintArgs {
            params: Some(path.to_string_lossy().into_owned()),
            ..PaintArgs::default()
        };
        assert_eq!(run(&args, false).unwrap(), ExitCode::SUCCESS);
    }
}
