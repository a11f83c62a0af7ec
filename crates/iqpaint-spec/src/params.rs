//! Paint request types.
//!
//! A [`PaintParams`] value is the complete, caller-supplied description of one
//! render. It can be built in code or loaded from a JSON params file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Output filename used when none is given.
pub const DEFAULT_OUTPUT: &str = "sample.cfile";

/// Print speed in characters per second used when none is given.
pub const DEFAULT_PRINT_SPEED: f64 = 1.0;

/// Direction the text runs on the waterfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Characters follow each other in time; each glyph spans the frequency axis.
    #[default]
    Horizontal,
    /// The whole line of text spans the frequency axis and is drawn top-down.
    Vertical,
}

impl Orientation {
    /// Returns the orientation name as used in params files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(format!(
                "unknown orientation '{}' (expected horizontal or vertical)",
                other
            )),
        }
    }
}

/// Parameters for one paint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaintParams {
    /// Text to paint. Each UTF-8 byte becomes one glyph.
    pub text: String,

    /// Sample rate of the output stream in samples per second.
    pub sample_rate: u64,

    /// Requested print speed in characters per second.
    #[serde(default = "default_print_speed")]
    pub print_speed: f64,

    /// Output gain in dB.
    #[serde(default)]
    pub gain_db: f64,

    /// Text orientation on the waterfall.
    #[serde(default)]
    pub orientation: Orientation,

    /// Output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Seed for the phase and background noise. `None` draws from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

fn default_print_speed() -> f64 {
    DEFAULT_PRINT_SPEED
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

impl PaintParams {
    /// Creates params with default print speed, gain, orientation and output.
    pub fn new(text: impl Into<String>, sample_rate: u64) -> Self {
        Self {
            text: text.into(),
            sample_rate,
            print_speed: DEFAULT_PRINT_SPEED,
            gain_db: 0.0,
            orientation: Orientation::default(),
            output: default_output(),
            seed: None,
        }
    }

    /// Sets the print speed in characters per second.
    pub fn with_print_speed(mut self, print_speed: f64) -> Self {
        self.print_speed = print_speed;
        self
    }

    /// Sets the gain in dB.
    pub fn with_gain_db(mut self, gain_db: f64) -> Self {
        self.gain_db = gain_db;
        self
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the noise seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Linear gain factor, `10^(gain_db / 20)`.
    pub fn linear_gain(&self) -> f64 {
        10f64.powf(self.gain_db / 20.0)
    }
}

/// Params as they appear in a params file.
///
/// Every field is optional so a file can be completed by command-line flags.
/// The camelCase spellings of older params files are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsFile {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "sampleRate")]
    pub sample_rate: Option<u64>,
    #[serde(default, alias = "printSpeed")]
    pub print_speed: Option<f64>,
    #[serde(default, alias = "gain")]
    pub gain_db: Option<f64>,
    #[serde(default)]
    pub orientation: Option<Orientation>,
    #[serde(default, alias = "filename")]
    pub output: Option<String>,
    #[serde(default)]
    pub seed: Option<u32>,
}

impl ParamsFile {
    /// Parses a params file document.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Completes the file into [`PaintParams`], filling unset optional fields
    /// with their defaults. Returns `None` if text or sample rate is missing.
    pub fn into_params(self) -> Option<PaintParams> {
        Some(PaintParams {
            text: self.text?,
            sample_rate: self.sample_rate?,
            print_speed: self.print_speed.unwrap_or(DEFAULT_PRINT_SPEED),
            gain_db: self.gain_db.unwrap_or(0.0),
            orientation: self.orientation.unwrap_or_default(),
            output: self.output.unwrap_or_else(default_output),
            seed: self.seed,
        })
    }
}
