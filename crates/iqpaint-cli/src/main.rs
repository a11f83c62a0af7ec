//! iqpaint CLI - Paint text onto an SDR waterfall
//!
//! This binary renders text into a raw cf32 IQ stream that spells the text
//! when replayed into a spectrum-analyzer waterfall.

use clap::Parser;
use std::process::ExitCode;

use iqpaint_cli::cli_args::{Cli, Commands};
use iqpaint_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Paint { args, json } => commands::paint::run(&args, json),
        Commands::Preview { args } => commands::preview::run(&args),
        Commands::Validate { args, json } => commands::validate::run(&args, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_CONFIG)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_preview() {
        let cli = Cli::try_parse_from(["iqpaint", "preview", "HELLO", "--vertical"]).unwrap();
        match cli.command {
            Commands::Preview { args } => {
                assert_eq!(args.text.as_deref(), Some("HELLO"));
                assert!(args.vertical);
                assert_eq!(args.sample_rate, None);
            }
            _ => panic!("expected preview command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["iqpaint"]).is_err());
    }

    #[test]
    fn test_cli_parses_paint_with_params_file() {
        let cli = Cli::try_parse_from([
            "iqpaint",
            "paint",
            "--params",
            "paint.json",
            "-o",
            "out.cfile",
        ])
        .unwrap();
        match cli.command {
            Commands::Paint { args, json } => {
                assert!(!json);
                assert_eq!(args.params.as_deref(), Some("paint.json"));
                assert_eq!(args.filename.as_deref(), Some("out.cfile"));
            }
            _ => panic!("expected paint command"),
        }
    }
}
