//! Rectangle composer
//!
//! Rectangles are built from the line rasterizer: `border_width` nested
//! frames of four edges each, optional rounded corners, then a fill made of
//! vertical lines. Every pixel goes through the pixel read-modify-write path
//! and is clipped to the rectangle's own box.

use crate::color::PixelState;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::line::{LineStyle, rasterize};

/// Corner shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CornerStyle {
    /// Square corners
    #[default]
    Square,
    /// Corners rounded with a fixed 4 px radius
    Rounded,
}

/// Interior fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillStyle {
    /// Leave the interior alone
    #[default]
    Transparent,
    /// Interior off
    White,
    /// Interior on
    Black,
    /// Alternating rows, with the row parity flipping every `period - 2`
    /// columns
    ///
    /// `Dither(3)` is a checkerboard. Periods of 2 or less never flip and
    /// give horizontal stripes.
    Dither(u8),
}

impl FillStyle {
    /// 50% gray checkerboard
    pub const GRAY: Self = Self::Dither(3);

    fn state_at(self, phase: &DitherPhase, primary: i16) -> Option<PixelState> {
        match self {
            Self::Transparent => None,
            Self::White => Some(PixelState::Off),
            Self::Black => Some(PixelState::On),
            Self::Dither(_) => Some(phase.state_at(primary)),
        }
    }
}

/// Column-to-column dither phase
///
/// Starts even (even rows on) and flips after every `period - 2` columns.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DitherPhase {
    flip_every: u8,
    count: u8,
    odd: bool,
}

impl DitherPhase {
    pub(crate) fn for_fill(style: FillStyle) -> Self {
        let period = match style {
            FillStyle::Dither(period) => period,
            _ => 0,
        };
        Self {
            flip_every: period.saturating_sub(2),
            count: 0,
            odd: false,
        }
    }

    pub(crate) fn is_odd(&self) -> bool {
        self.odd
    }

    fn state_at(&self, primary: i16) -> PixelState {
        PixelState::from((primary & 1 != 0) == self.odd)
    }

    /// Move on to the next column
    pub(crate) fn advance(&mut self) {
        if self.flip_every == 0 {
            return;
        }
        self.count += 1;
        if self.count == self.flip_every {
            self.odd = !self.odd;
            self.count = 0;
        }
    }
}

/// Rectangle position and size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left column
    pub x: u8,
    /// Top row
    pub y: u8,
    /// Width, at least 1
    pub width: u8,
    /// Height, at least 1
    pub height: u8,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(x: u8, y: u8, width: u8, height: u8) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// How a rectangle is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectStyle {
    /// Style of the border lines
    pub frame: LineStyle,
    /// Corner shape
    pub corner: CornerStyle,
    /// Number of nested border frames; 0 draws no border
    pub border_width: u8,
    /// Interior fill
    pub fill: FillStyle,
}

/// Arc pixels of a rounded corner, relative to the top-left corner
const ARC_OFFSETS: [(i16, i16); 4] = [(1, 2), (1, 3), (2, 1), (3, 1)];

/// Radius of rounded corners
const CORNER_RADIUS: i16 = 4;

/// Inclusive pixel box
#[derive(Clone, Copy)]
struct Bounds {
    left: i16,
    top: i16,
    right: i16,
    bottom: i16,
}

impl Bounds {
    fn contains(self, x: i16, y: i16) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a rectangle with an optional border and fill
    ///
    /// The border is `border_width` nested frames. After the border, the
    /// fill area shrinks by `border_width - 1` on every side and the fill
    /// covers the columns and rows strictly inside it, so even
    /// `border_width = 0` leaves a 1 px margin.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` without any bus traffic if the
    /// rectangle is empty or does not fit on the canvas.
    pub fn draw_rect(&mut self, rect: Rect, style: RectStyle) -> DisplayResult<I> {
        self.check_rect(rect)?;

        let bounds = Bounds {
            left: i16::from(rect.x),
            top: i16::from(rect.y),
            right: i16::from(rect.x) + i16::from(rect.width) - 1,
            bottom: i16::from(rect.y) + i16::from(rect.height) - 1,
        };
        let rounded = style.corner == CornerStyle::Rounded;
        let Bounds {
            mut left,
            mut top,
            mut right,
            mut bottom,
        } = bounds;

        if style.border_width > 0 {
            let corner_state = PixelState::from(style.frame != LineStyle::Blank);
            for a in 0..i16::from(style.border_width) {
                let inset = if rounded { CORNER_RADIUS + a } else { a };
                let edges = [
                    ((left + inset, top + a), (right - inset, top + a)),
                    ((right - a, top + inset), (right - a, bottom - inset)),
                    ((right - inset, bottom - a), (left + inset, bottom - a)),
                    ((left + a, bottom - inset), (left + a, top + inset)),
                ];
                for (from, to) in edges {
                    self.clipped_line(bounds, style.frame, from, to)?;
                }

                if rounded {
                    for (dx, dy) in ARC_OFFSETS {
                        let (dx, dy) = (dx + a, dy + a);
                        self.clipped_pixel(bounds, corner_state, left + dx, top + dy)?;
                        self.clipped_pixel(bounds, corner_state, right - dx, top + dy)?;
                        self.clipped_pixel(bounds, corner_state, right - dx, bottom - dy)?;
                        self.clipped_pixel(bounds, corner_state, left + dx, bottom - dy)?;
                    }
                }
            }

            let shrink = i16::from(style.border_width) - 1;
            left += shrink;
            top += shrink;
            right -= shrink;
            bottom -= shrink;
        }

        if style.fill == FillStyle::Transparent {
            return Ok(());
        }

        let width = i16::from(rect.width);
        let mut phase = DitherPhase::for_fill(style.fill);
        for a in 1..(right - left) {
            let column = left + a;
            let mut column_top = top + 1;
            let mut column_bottom = bottom - 1;
            if rounded {
                let from_edge = if a > 3 { width - a } else { a };
                let inset = match from_edge {
                    1 => 3,
                    2 | 3 => 1,
                    _ => 0,
                };
                column_top += inset;
                column_bottom -= inset;
            }

            // Insets can cross on short rects; the crossed span is still drawn
            rasterize(column, column_top, column, column_bottom, |primary, x, y| {
                match style.fill.state_at(&phase, primary) {
                    Some(state) => self.clipped_pixel(bounds, state, x, y),
                    None => Ok(()),
                }
            })?;
            phase.advance();
        }
        Ok(())
    }

    fn check_rect(&self, rect: Rect) -> DisplayResult<I> {
        let dims = self.dimensions();
        let right = u16::from(rect.x) + u16::from(rect.width);
        let bottom = u16::from(rect.y) + u16::from(rect.height);
        if rect.width == 0 || rect.height == 0 || right > dims.cols || bottom > dims.rows {
            return Err(Error::OutOfBounds {
                x: right.saturating_sub(1),
                y: bottom.saturating_sub(1),
            });
        }
        Ok(())
    }

    fn clipped_line(
        &mut self,
        bounds: Bounds,
        style: LineStyle,
        from: (i16, i16),
        to: (i16, i16),
    ) -> DisplayResult<I> {
        rasterize(from.0, from.1, to.0, to.1, |primary, x, y| {
            self.clipped_pixel(bounds, style.state_at(primary), x, y)
        })
    }

    fn clipped_pixel(
        &mut self,
        bounds: Bounds,
        state: PixelState,
        x: i16,
        y: i16,
    ) -> DisplayResult<I> {
        if !bounds.contains(x, y) {
            return Ok(());
        }
        self.write_pixel(state, x as u8, y as u8)
    }
}
