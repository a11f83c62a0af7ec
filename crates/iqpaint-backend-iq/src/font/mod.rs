//! Fixed bitmap font and glyph rasterization.
//!
//! Glyphs live in a 16x16 character sheet: the low nibble of a character code
//! selects the column, the high nibble selects the row of characters. Each
//! glyph line is one byte, most significant bit on the left. The sheet is built
//! at compile time from the 5x7 patterns in [`glyphs`], so it is immutable
//! for the lifetime of the process.
//!
//! Codes without a pattern (control characters, DEL and everything above
//! 0x7E) rasterize to an all-zero mask.

mod glyphs;

use iqpaint_spec::Orientation;

use glyphs::{FIRST_CODE, PATTERNS, PATTERN_HEIGHT, PATTERN_WIDTH};

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: usize = 8;

/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: usize = 16;

/// Blank columns added after each glyph.
pub const CHAR_PAD: usize = 1;

/// Width of one character including padding.
pub const CELL_WIDTH: usize = GLYPH_WIDTH + CHAR_PAD;

/// Characters per sheet row.
pub const CHARS_PER_LINE: usize = 16;

/// Frequency-domain magnitude of a lit pixel.
pub const AMPLITUDE: f32 = 0.05;

const SHEET_LEN: usize = CHARS_PER_LINE * CHARS_PER_LINE * GLYPH_HEIGHT;

// One blank column on the left, one blank line on top.
const PATTERN_SHIFT: u32 = (GLYPH_WIDTH - PATTERN_WIDTH - 1) as u32;
const TOP_MARGIN: usize = 1;

static FONT_SHEET: [u8; SHEET_LEN] = build_sheet();

const fn build_sheet() -> [u8; SHEET_LEN] {
    let mut sheet = [0u8; SHEET_LEN];
    let mut i = 0;
    while i < PATTERNS.len() {
        let code = FIRST_CODE + i;
        let cx = code & 0x0F;
        let cy = (code >> 4) * GLYPH_HEIGHT;
        let mut row = 0;
        while row < PATTERN_HEIGHT {
            let bits = PATTERNS[i][row] << PATTERN_SHIFT;
            let line = TOP_MARGIN + row * 2;
            sheet[cy * CHARS_PER_LINE + line * CHARS_PER_LINE + cx] = bits;
            sheet[cy * CHARS_PER_LINE + (line + 1) * CHARS_PER_LINE + cx] = bits;
            row += 1;
        }
        i += 1;
    }
    sheet
}

/// Returns one line of a glyph as a bit row (MSB = leftmost pixel).
///
/// # Panics
/// Panics if `line >= GLYPH_HEIGHT`.
pub fn glyph_line(code: u8, line: usize) -> u8 {
    assert!(line < GLYPH_HEIGHT, "glyph line {} out of range", line);
    let cx = (code & 0x0F) as usize;
    let cy = ((code & 0xF0) >> 4) as usize * GLYPH_HEIGHT;
    FONT_SHEET[cy * CHARS_PER_LINE + line * CHARS_PER_LINE + cx]
}

/// Returns true if pixel `bit` (0 = leftmost) of glyph line `line` is lit.
pub fn is_lit(code: u8, line: usize, bit: usize) -> bool {
    bit < GLYPH_WIDTH && glyph_line(code, line) & (0x80 >> bit) != 0
}

/// Returns true if the font has a pattern for `code`.
pub fn has_glyph(code: u8) -> bool {
    let code = code as usize;
    (FIRST_CODE..FIRST_CODE + PATTERNS.len()).contains(&code)
}

/// Rasterizes one character into an amplitude mask.
///
/// Horizontal masks have [`CELL_WIDTH`] rows of `GLYPH_HEIGHT + 2 * border_length`
/// values; vertical masks have [`GLYPH_HEIGHT`] rows of [`CELL_WIDTH`] values and
/// ignore `border_length`.
pub fn glyph_mask(code: u8, orientation: Orientation, border_length: usize) -> Vec<Vec<f32>> {
    match orientation {
        Orientation::Horizontal => glyph_mask_horizontal(code, border_length),
        Orientation::Vertical => glyph_mask_vertical(code),
    }
}

/// Horizontal mask: one row per pixel column, glyph lines along the row.
///
/// Pixel `b` of glyph line `l` lands at `mask[b][l + border_length]`.
pub fn glyph_mask_horizontal(code: u8, border_length: usize) -> Vec<Vec<f32>> {
    let mut mask = vec![vec![0.0f32; GLYPH_HEIGHT + border_length * 2]; CELL_WIDTH];

    for (b, row) in mask.iter_mut().enumerate().take(GLYPH_WIDTH) {
        for l in 0..GLYPH_HEIGHT {
            if is_lit(code, l, b) {
                row[l + border_length] = AMPLITUDE;
            }
        }
    }

    mask
}

/// Vertical mask: one row per glyph line, read bottom to top.
///
/// Pixel `b` of glyph line `l` lands at `mask[GLYPH_HEIGHT - l - 1][b]`.
pub fn glyph_mask_vertical(code: u8) -> Vec<Vec<f32>> {
    let mut mask = vec![vec![0.0f32; CELL_WIDTH]; GLYPH_HEIGHT];

    for l in 0..GLYPH_HEIGHT {
        let row = &mut mask[GLYPH_HEIGHT - l - 1];
        for (b, value) in row.iter_mut().enumerate().take(GLYPH_WIDTH) {
            if is_lit(code, l, b) {
                *value = AMPLITUDE;
            }
        }
    }

    mask
}
