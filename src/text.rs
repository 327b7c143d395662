//! Text rendering
//!
//! Glyphs are drawn column by column straight into display RAM. For every
//! column the driver reads a 32-bit vertical slice (up to four pages) in
//! page-first burst mode, clears the rows the glyph covers, merges the glyph
//! bits and writes the slice back. Glyphs can start on any row, so the slice
//! is anchored one page above the cursor whenever there is a page above.
//!
//! | Font      | Column repeat | Height        | Advance |
//! |-----------|---------------|---------------|---------|
//! | 5x8       | 1             | single        | 6       |
//! | 5x15      | 1             | double        | 6       |
//! | 10x15     | 2             | double        | 11      |
//! | 10x8      | 2             | single        | 11      |
//!
//! ## Example
//!
//! ```
//! use uc1601s::text::{double_height, glyph_mask, slice_origin};
//!
//! // Row 13 sits in page 1, so the slice starts at page 0 with offset 13
//! assert_eq!(slice_origin(13), (0, 13));
//!
//! // Each source row becomes two rows
//! assert_eq!(double_height(0b0000_0101), 0b0011_0011);
//!
//! // Single-height glyph at offset 0 replaces the low byte
//! assert_eq!(glyph_mask(false, 0), 0xFFFF_FF00);
//! ```

use log::{debug, warn};

use crate::command::RamAddressControl;
use crate::display::Display;
use crate::error::Error;
use crate::font::{GLYPH_WIDTH, glyph_columns};
use crate::interface::DisplayInterface;
use crate::memory::{CellAddress, PAGE_HEIGHT, bit_of, page_of};

/// Pages covered by one vertical slice
const SLICE_PAGES: u8 = 4;

/// Font size selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontSize {
    /// 5x8, the glyph table as stored
    #[default]
    Font5x8,
    /// 5x15, double height
    Font5x15,
    /// 10x15, double height and width
    Font10x15,
    /// 10x8, double width
    Font10x8,
}

impl FontSize {
    /// Number of times each glyph column is emitted
    pub const fn column_repeat(self) -> u8 {
        match self {
            Self::Font5x8 | Self::Font5x15 => 1,
            Self::Font10x15 | Self::Font10x8 => 2,
        }
    }

    /// Whether each glyph row is drawn twice
    pub const fn is_double_height(self) -> bool {
        matches!(self, Self::Font5x15 | Self::Font10x15)
    }

    /// Columns taken by one character including the separator
    pub const fn advance(self) -> u8 {
        GLYPH_WIDTH as u8 * self.column_repeat() + 1
    }
}

/// Glyph polarity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Inversion {
    /// Dark glyph on the existing background
    #[default]
    Normal,
    /// Light glyph in a dark box, including the row above and the separator
    Inverted,
}

/// Font size and polarity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size
    pub font: FontSize,
    /// Polarity
    pub inversion: Inversion,
}

impl TextStyle {
    /// Create a text style
    pub const fn new(font: FontSize, inversion: Inversion) -> Self {
        Self { font, inversion }
    }

    fn is_inverted(self) -> bool {
        self.inversion == Inversion::Inverted
    }
}

/// Result of rendering one glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphOutcome {
    /// All columns and the separator were drawn
    Complete,
    /// The right edge was reached; the glyph was cut off
    Truncated,
}

/// Expand a column byte to double height: bit `r` goes to bits `2r` and `2r + 1`
pub fn double_height(column: u8) -> u16 {
    (0..8).fold(0, |acc, row| {
        if column & (1 << row) != 0 {
            acc | (0b11 << (2 * row))
        } else {
            acc
        }
    })
}

/// First page of the slice for a glyph starting at row `y`, and the bit
/// offset of row `y` inside the slice
///
/// The slice starts one page above the glyph so an inverted glyph can darken
/// the row above it. In page 0 there is no page above.
pub const fn slice_origin(y: u8) -> (u8, u8) {
    let page = page_of(y);
    if page == 0 {
        (0, bit_of(y))
    } else {
        (page - 1, bit_of(y) + PAGE_HEIGHT)
    }
}

/// Slice bits that a glyph column at `offset` keeps from the background
pub const fn glyph_mask(double: bool, offset: u8) -> u32 {
    let mask: u32 = if double { 0xFFFF_0000 } else { 0xFFFF_FF00 };
    mask.rotate_left(offset as u32)
}

/// Glyph column placed at `offset` in the slice
///
/// Inverted glyphs also set the row above the glyph when there is one.
pub fn glyph_slice(column: u8, double: bool, inverted: bool, offset: u8) -> u32 {
    let source = if inverted { !column } else { column };
    let bits = if double {
        u32::from(double_height(source))
    } else {
        u32::from(source)
    };
    let mut slice = bits << offset;
    if inverted && offset > 0 {
        slice |= 1 << (offset - 1);
    }
    slice
}

/// Separator column: glyph rows cleared, or set when inverted
pub const fn separator_slice(background: u32, double: bool, inverted: bool, offset: u8) -> u32 {
    if inverted {
        let span: u32 = if double { 0xFFFF } else { 0xFF };
        background | span.rotate_left(offset as u32)
    } else {
        background & glyph_mask(double, offset)
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw `text` starting at `(x, y)`
    ///
    /// Characters are laid out left to right and never wrap. Layout stops at
    /// the first character that would start, or continue, past the right
    /// edge. Characters without a glyph are skipped without advancing.
    ///
    /// Returns the number of characters drawn completely. The controller is
    /// left in the default addressing mode whenever this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` without any bus traffic if `(x, y)` is
    /// off the canvas.
    pub fn draw_string(
        &mut self,
        text: &str,
        x: u8,
        y: u8,
        style: TextStyle,
    ) -> Result<usize, Error<I>> {
        self.check_bounds(x, y)?;
        self.move_to(x, y)?;

        let last_column = self.dimensions().last_column();
        let mut drawn = 0;
        for ch in text.chars() {
            if self.cursor().x > last_column {
                break;
            }
            let Some(columns) = u8::try_from(u32::from(ch)).ok().and_then(glyph_columns) else {
                warn!("uc1601s: no glyph for {:?}, skipped", ch);
                continue;
            };
            match self.render_glyph(columns, style)? {
                GlyphOutcome::Complete => drawn += 1,
                GlyphOutcome::Truncated => break,
            }
        }
        self.ensure_addressing_mode(RamAddressControl::DEFAULT)?;
        Ok(drawn)
    }

    /// Draw character `code` at the cursor and advance the cursor past it
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedGlyph` without any bus traffic if `code`
    /// is not in the glyph table.
    pub fn draw_char(&mut self, code: u8, style: TextStyle) -> Result<GlyphOutcome, Error<I>> {
        let columns = glyph_columns(code).ok_or(Error::UnsupportedGlyph {
            code: u32::from(code),
        })?;
        self.render_glyph(columns, style)
    }

    fn render_glyph(
        &mut self,
        columns: [u8; GLYPH_WIDTH],
        style: TextStyle,
    ) -> Result<GlyphOutcome, Error<I>> {
        let double = style.font.is_double_height();
        let inverted = style.is_inverted();
        let (origin_page, offset) = slice_origin(self.cursor().y);
        let mask = glyph_mask(double, offset);

        self.ensure_addressing_mode(RamAddressControl::PAGE_BURST)?;

        for column in columns {
            let glyph = glyph_slice(column, double, inverted, offset);
            for _ in 0..style.font.column_repeat() {
                if self.past_right_edge() {
                    return self.truncate();
                }
                let background = self.read_slice(origin_page)?;
                self.write_slice(origin_page, (background & mask) | glyph)?;
            }
        }

        if self.past_right_edge() {
            return self.truncate();
        }
        let background = self.read_slice(origin_page)?;
        self.write_slice(
            origin_page,
            separator_slice(background, double, inverted, offset),
        )?;

        self.set_addressing_mode(RamAddressControl::DEFAULT)?;
        Ok(GlyphOutcome::Complete)
    }

    fn past_right_edge(&self) -> bool {
        self.cursor().x > self.dimensions().last_column()
    }

    fn truncate(&mut self) -> Result<GlyphOutcome, Error<I>> {
        debug!("uc1601s: text truncated at column {}", self.cursor().x);
        self.set_addressing_mode(RamAddressControl::DEFAULT)?;
        Ok(GlyphOutcome::Truncated)
    }

    /// Pages of the slice that exist on this display
    fn slice_len(&self, origin_page: u8) -> usize {
        let available = self.dimensions().pages().saturating_sub(origin_page);
        usize::from(available.min(SLICE_PAGES))
    }

    /// Read the slice at the cursor column, missing pages read as 0
    fn read_slice(&mut self, origin_page: u8) -> Result<u32, Error<I>> {
        let len = self.slice_len(origin_page);
        self.address(CellAddress {
            page: origin_page,
            column: self.cursor().x,
        })?;

        // Dummy byte first, then the pages in order
        let mut buffer = [0u8; SLICE_PAGES as usize + 1];
        self.read_data(&mut buffer[..=len])?;

        let mut bytes = [0u8; SLICE_PAGES as usize];
        bytes[..len].copy_from_slice(&buffer[1..=len]);
        Ok(u32::from_le_bytes(bytes))
    }

    /// Write the slice at the cursor column and step the cursor right
    fn write_slice(&mut self, origin_page: u8, slice: u32) -> Result<(), Error<I>> {
        let len = self.slice_len(origin_page);
        self.address(CellAddress {
            page: origin_page,
            column: self.cursor().x,
        })?;
        self.advance_cursor_column();
        self.send_data(&slice.to_le_bytes()[..len])
    }
}
