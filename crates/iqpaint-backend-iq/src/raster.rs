//! Raster buffer: the whole message as rows of frequency-domain magnitudes.

use iqpaint_spec::Orientation;

use crate::config::RasterLayout;
use crate::font::{glyph_mask, GLYPH_HEIGHT};

/// Amplitude matrix for one message. Every row has the same length, which is
/// the transform size of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBuffer {
    rows: Vec<Vec<f32>>,
    row_len: usize,
}

impl RasterBuffer {
    /// Rasterizes `text` according to `layout`.
    ///
    /// Horizontal layouts stack each character's mask as further rows, so the
    /// row length stays fixed whatever the text length. Vertical layouts append
    /// each character's mask column-wise between a leading and trailing border.
    pub fn build(text: &[u8], layout: &RasterLayout) -> Self {
        let masks = text
            .iter()
            .map(|&code| glyph_mask(code, layout.orientation, layout.border_length));

        let rows: Vec<Vec<f32>> = match layout.orientation {
            Orientation::Horizontal => masks.flatten().collect(),
            Orientation::Vertical => {
                let mut rows: Vec<Vec<f32>> = (0..GLYPH_HEIGHT)
                    .map(|_| {
                        let mut row = Vec::with_capacity(layout.row_len);
                        row.resize(layout.border_length, 0.0);
                        row
                    })
                    .collect();

                for mask in masks {
                    for (row, glyph_row) in rows.iter_mut().zip(mask) {
                        row.extend_from_slice(&glyph_row);
                    }
                }

                let trailing = layout.trailing_border();
                for row in &mut rows {
                    row.resize(row.len() + trailing, 0.0);
                }
                rows
            }
        };

        Self {
            rows,
            row_len: layout.row_len,
        }
    }

    /// Rows in emission order.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of every row.
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v != 0.0).count()
    }
}
