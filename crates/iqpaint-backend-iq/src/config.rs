//! Render configuration: raster geometry and timing derived once per run.
//!
//! [`RenderConfig`] is computed from [`PaintParams`] before any synthesis and is
//! read-only afterwards. Every pipeline stage takes it by reference.

use iqpaint_spec::{
    validate_params, ErrorCode, Orientation, PaintParams, ValidationError, ValidationWarning,
    WarningCode,
};

use crate::error::{IqError, IqResult};
use crate::font::{has_glyph, CELL_WIDTH, GLYPH_HEIGHT};

/// Row length used for horizontal painting.
pub const HORIZONTAL_ROW_LEN: usize = 64;

/// Minimum empty columns around vertically painted text.
pub const VERTICAL_MARGIN: usize = 16;

/// Upper bound on complex samples in one rendered stream.
pub const MAX_TOTAL_SAMPLES: u64 = 1 << 28;

/// Upper bound on raster cells (rows times row length) for one message.
pub const MAX_RASTER_CELLS: u64 = 1 << 24;

/// Shape of the raster buffer for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterLayout {
    /// Text orientation.
    pub orientation: Orientation,
    /// Number of characters painted.
    pub text_len: usize,
    /// Empty columns before the painted region of every row.
    pub border_length: usize,
    /// Length of every row; also the transform size.
    pub row_len: usize,
    /// Number of rows, one per output symbol.
    pub row_count: usize,
    /// Rows spent on one character, used for timing.
    pub glyph_extent: usize,
}

impl RasterLayout {
    /// Computes the layout for `text_len` characters.
    pub fn new(text_len: usize, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self {
                orientation,
                text_len,
                border_length: (HORIZONTAL_ROW_LEN - GLYPH_HEIGHT) / 2,
                row_len: HORIZONTAL_ROW_LEN,
                row_count: text_len * CELL_WIDTH,
                glyph_extent: CELL_WIDTH,
            },
            Orientation::Vertical => {
                let message = text_len * CELL_WIDTH;
                let row_len = (VERTICAL_MARGIN + message).next_power_of_two();
                Self {
                    orientation,
                    text_len,
                    border_length: (row_len - message) / 2,
                    row_len,
                    row_count: GLYPH_HEIGHT,
                    glyph_extent: GLYPH_HEIGHT,
                }
            }
        }
    }

    /// Number of amplitude cells in the raster.
    pub fn cell_count(&self) -> u64 {
        (self.row_count as u64).saturating_mul(self.row_len as u64)
    }

    /// Empty columns after the painted region. Zero for horizontal layouts,
    /// whose borders are part of each glyph mask.
    pub fn trailing_border(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => self.row_len - self.border_length - self.text_len * CELL_WIDTH,
        }
    }
}

/// Symbol timing derived from sample rate and print speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Seconds per sample.
    pub sample_duration: f64,
    /// Seconds per character at the requested print speed.
    pub char_duration: f64,
    /// Symbols per second if each row were emitted once, rounded down.
    pub lines_per_second: u64,
    /// Repetitions of each symbol.
    pub interp_factor: usize,
}

impl Timing {
    /// Derives timing for rows of `row_len` samples.
    ///
    /// The interpolation factor is `floor(1 / (row_len * sample_duration * char_duration))`
    /// and may be zero for extreme print speed and sample rate combinations.
    ///
    /// It is evaluated as the single quotient
    /// `sample_rate * print_speed / (row_len * glyph_extent)` so that exact
    /// integer ratios do not floor one short.
    pub fn new(sample_rate: u64, print_speed: f64, row_len: usize, glyph_extent: usize) -> Self {
        let sample_duration = 1.0 / sample_rate as f64;
        let char_duration = glyph_extent as f64 / print_speed;
        let symbol_cells = (row_len as u64).saturating_mul(glyph_extent as u64).max(1);
        let repeats = (sample_rate as f64 * print_speed) / symbol_cells as f64;

        Self {
            sample_duration,
            char_duration,
            lines_per_second: sample_rate / row_len.max(1) as u64,
            interp_factor: repeats.floor().max(0.0) as usize,
        }
    }
}

/// Immutable configuration for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Text as painted, one glyph per byte.
    pub text: Vec<u8>,
    /// Raster geometry.
    pub layout: RasterLayout,
    /// Symbol timing.
    pub timing: Timing,
    /// Output sample rate in samples per second.
    pub sample_rate: u64,
    /// Requested print speed in characters per second.
    pub print_speed: f64,
    /// Gain in dB.
    pub gain_db: f64,
    /// Gain as a linear factor.
    pub gain_linear: f32,
}

impl RenderConfig {
    /// Validates params and derives the render configuration.
    ///
    /// Fails with [`IqError::InvalidParams`] on configuration errors, including a
    /// raster larger than [`MAX_RASTER_CELLS`] and a stream longer than
    /// [`MAX_TOTAL_SAMPLES`]. The raster bound holds even when the stream
    /// would be empty.
    pub fn from_params(params: &PaintParams) -> IqResult<Self> {
        validate_params(params)
            .into_result()
            .map_err(IqError::InvalidParams)?;

        let text = params.text.as_bytes().to_vec();
        let layout = RasterLayout::new(text.len(), params.orientation);

        let cells = layout.cell_count();
        if cells > MAX_RASTER_CELLS {
            return Err(IqError::InvalidParams(vec![ValidationError::with_path(
                ErrorCode::RasterTooLarge,
                format!(
                    "raster of {} rows x {} bins exceeds the limit of {} cells; shorten the text",
                    layout.row_count, layout.row_len, MAX_RASTER_CELLS
                ),
                "text",
            )]));
        }

        let timing = Timing::new(
            params.sample_rate,
            params.print_speed,
            layout.row_len,
            layout.glyph_extent,
        );

        let config = Self {
            text,
            layout,
            timing,
            sample_rate: params.sample_rate,
            print_speed: params.print_speed,
            gain_db: params.gain_db,
            gain_linear: params.linear_gain() as f32,
        };

        let samples = config.total_samples_u64();
        if samples > MAX_TOTAL_SAMPLES {
            return Err(IqError::InvalidParams(vec![ValidationError::with_path(
                ErrorCode::OutputTooLarge,
                format!(
                    "stream of {} samples exceeds the limit of {}; lower print_speed or sample_rate",
                    samples, MAX_TOTAL_SAMPLES
                ),
                "print_speed",
            )]));
        }

        Ok(config)
    }

    /// Number of complex samples in the rendered stream.
    pub fn total_samples(&self) -> usize {
        self.layout.row_count * self.timing.interp_factor * self.layout.row_len
    }

    /// Output duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.total_samples() as f64 * self.timing.sample_duration
    }

    /// Warnings for degraded but valid configurations.
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if self.timing.interp_factor < 1 {
            warnings.push(ValidationWarning::with_path(
                WarningCode::DegradedInterpolation,
                format!(
                    "interpolation factor rounds to zero at {} sps and {} chars/s; the stream will be empty",
                    self.sample_rate, self.print_speed
                ),
                "print_speed",
            ));
        }

        let mut missing: Vec<u8> = self.text.iter().copied().filter(|&c| !has_glyph(c)).collect();
        missing.sort_unstable();
        missing.dedup();
        if !missing.is_empty() {
            let codes = missing
                .iter()
                .map(|c| format!("{:#04x}", c))
                .collect::<Vec<_>>()
                .join(", ");
            warnings.push(ValidationWarning::with_path(
                WarningCode::MissingGlyphs,
                format!("no glyph for {}; painted blank", codes),
                "text",
            ));
        }

        warnings
    }

    fn total_samples_u64(&self) -> u64 {
        (self.layout.row_count as u64)
            .saturating_mul(self.timing.interp_factor as u64)
            .saturating_mul(self.layout.row_len as u64)
    }
}
