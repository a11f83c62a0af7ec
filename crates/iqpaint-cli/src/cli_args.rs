//! CLI argument definitions for the iqpaint command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

/// iqpaint - Paint text onto an SDR waterfall as a raw IQ stream
#[derive(Parser, Debug)]
#[command(name = "iqpaint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text into a headerless cf32 IQ file
    Paint {
        #[command(flatten)]
        args: PaintArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the raster buffer as a terminal bitmap without synthesizing samples
    Preview {
        #[command(flatten)]
        args: PaintArgs,
    },

    /// Validate parameters and print the derived render configuration
    Validate {
        #[command(flatten)]
        args: PaintArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Paint parameters shared by every command. Flags override values loaded
/// from `--params`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct PaintArgs {
    /// Text to paint
    pub text: Option<String>,

    /// Sample rate in samples per second
    #[arg(short, long = "sample-rate", visible_alias = "sampleRate")]
    pub sample_rate: Option<u64>,

    /// Print speed in characters per second (default: 1)
    #[arg(short, long = "print-speed", visible_alias = "printSpeed")]
    pub print_speed: Option<f64>,

    /// Gain in dB (default: 0)
    #[arg(short, long, allow_negative_numbers = true)]
    pub gain: Option<f64>,

    /// Paint each character vertically
    #[arg(long)]
    pub vertical: bool,

    /// Output file (default: sample.cfile)
    #[arg(short = 'o', long = "filename", visible_alias = "output")]
    pub filename: Option<String>,

    /// Seed for reproducible noise (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u32>,

    /// JSON params file; flags override its values
    #[arg(long)]
    pub params: Option<String>,
}
