//! Line rasterizer
//!
//! Integer Bresenham between inclusive endpoints. Every primary step plots
//! exactly one pixel through the pixel read-modify-write path, so a line
//! only ever touches the pixels on it.

use crate::color::PixelState;
use crate::display::{Display, DisplayResult};
use crate::interface::DisplayInterface;

/// How pixels along a line are set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// Every pixel off
    Blank,
    /// Every pixel on
    Solid,
    /// On where `primary & (period - 1) == 0`, off elsewhere
    ///
    /// `primary` is the coordinate the line steps along (x for shallow
    /// lines, y for steep ones). Periods that are powers of two give evenly
    /// spaced dots.
    Dotted(u8),
}

impl LineStyle {
    /// Pixel state at primary coordinate `primary`
    pub fn state_at(self, primary: i16) -> PixelState {
        match self {
            Self::Blank => PixelState::Off,
            Self::Solid => PixelState::On,
            Self::Dotted(period) => {
                let mask = i16::from(period.saturating_sub(1));
                PixelState::from(primary & mask == 0)
            }
        }
    }
}

/// Walk the Bresenham line from `(x0, y0)` to `(x1, y1)`
///
/// `plot` receives `(primary, x, y)` for every pixel, in order of increasing
/// primary coordinate. Stops at the first error `plot` returns.
pub(crate) fn rasterize<E, F>(x0: i16, y0: i16, x1: i16, y1: i16, mut plot: F) -> Result<(), E>
where
    F: FnMut(i16, i16, i16) -> Result<(), E>,
{
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let (mut p0, mut s0, mut p1, mut s1) = if steep {
        (y0, x0, y1, x1)
    } else {
        (x0, y0, x1, y1)
    };
    if p0 > p1 {
        core::mem::swap(&mut p0, &mut p1);
        core::mem::swap(&mut s0, &mut s1);
    }

    let delta_p = p1 - p0;
    let delta_s = (s1 - s0).abs();
    let step = if s0 < s1 { 1 } else { -1 };
    let mut error = 0;
    let mut secondary = s0;

    for primary in p0..=p1 {
        if steep {
            plot(primary, secondary, primary)?;
        } else {
            plot(primary, primary, secondary)?;
        }
        error += delta_s;
        if 2 * error >= delta_p {
            secondary += step;
            error -= delta_p;
        }
    }
    Ok(())
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw a line between two inclusive endpoints
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` without any bus traffic if either
    /// endpoint is off the canvas.
    pub fn draw_line(
        &mut self,
        style: LineStyle,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
    ) -> DisplayResult<I> {
        self.check_bounds(x0, y0)?;
        self.check_bounds(x1, y1)?;

        rasterize(
            i16::from(x0),
            i16::from(y0),
            i16::from(x1),
            i16::from(y1),
            |primary, x, y| self.write_pixel(style.state_at(primary), x as u8, y as u8),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use alloc::vec::Vec;
    use core::convert::Infallible;

    fn points(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<(i16, i16)> {
        let mut out = Vec::new();
        rasterize::<Infallible, _>(x0, y0, x1, y1, |_, x, y| {
            out.push((x, y));
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn test_horizontal_line_is_inclusive() {
        assert_eq!(points(2, 3, 5, 3), [(2, 3), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(points(7, 7, 7, 7), [(7, 7)]);
    }

    #[test]
    fn test_steep_line_steps_along_y() {
        let pts = points(0, 0, 2, 6);
        assert_eq!(pts.len(), 7);
        for (i, &(_, y)) in pts.iter().enumerate() {
            assert_eq!(y, i as i16);
        }
        assert_eq!(pts[0], (0, 0));
        assert_eq!(pts[6], (2, 6));
    }

    #[test]
    fn test_endpoint_order_does_not_matter() {
        let mut forward = points(1, 2, 11, 7);
        let mut backward = points(11, 7, 1, 2);
        forward.sort_unstable();
        backward.sort_unstable();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_one_pixel_per_primary_step() {
        let pts = points(0, 10, 20, 3);
        assert_eq!(pts.len(), 21);
        let xs: Vec<i16> = pts.iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, (0..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_dotted_state() {
        let style = LineStyle::Dotted(2);
        assert_eq!(style.state_at(0), PixelState::On);
        assert_eq!(style.state_at(1), PixelState::Off);
        assert_eq!(style.state_at(4), PixelState::On);

        let sparse = LineStyle::Dotted(4);
        assert_eq!(sparse.state_at(4), PixelState::On);
        assert_eq!(sparse.state_at(6), PixelState::Off);
    }

    #[test]
    fn test_dotted_line_lights_even_columns() {
        let mut display = mock::default_display();
        display.draw_line(LineStyle::Solid, 0, 1, 9, 1).unwrap();
        display.draw_line(LineStyle::Dotted(2), 0, 0, 9, 0).unwrap();

        let mock = display.interface();
        for x in 0..10 {
            assert_eq!(mock.pixel(x, 0), x % 2 == 0, "x = {x}");
            // Row below is untouched
            assert!(mock.pixel(x, 1));
        }
        assert!(!mock.pixel(10, 0));
    }

    #[test]
    fn test_blank_line_clears() {
        let mut display = mock::default_display();
        display.interface_mut().fill_ram(0xFF);
        display.draw_line(LineStyle::Blank, 0, 63, 131, 63).unwrap();

        let mock = display.interface();
        assert_eq!(mock.cell(7, 0), 0x7F);
        assert_eq!(mock.cell(7, 131), 0x7F);
        assert_eq!(mock.cell(6, 0), 0xFF);
    }

    #[test]
    fn test_line_out_of_bounds_has_no_traffic() {
        let mut display = mock::default_display();
        let result = display.draw_line(LineStyle::Solid, 0, 0, 140, 10);
        assert!(matches!(
            result,
            Err(crate::Error::OutOfBounds { x: 140, y: 10 })
        ));
        assert!(display.interface().events.is_empty());
    }
}
