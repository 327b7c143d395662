//! Graphics support via embedded-graphics
//!
//! [`Display`] implements the [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget)
//! trait from the embedded-graphics ecosystem with [`PixelState`] as its color.
//! There is no frame buffer: every pixel is a read-modify-write against the
//! controller's display RAM, so large filled shapes are slow. Prefer
//! [`Display::fill`] and [`Display::draw_rect`] for big areas.
//!
//! Pixels outside the canvas are skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, Line, PrimitiveStyle},
//! };
//! use uc1601s::PixelState;
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::i2c::{I2c, Operation};
//! # use uc1601s::{Builder, Dimensions, Display, Interface};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let dims = match Dimensions::new(64, 132) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(Interface::new(MockI2c, MockPin), config);
//!
//! let _ = Line::new(Point::new(0, 0), Point::new(131, 63))
//!     .into_styled(PrimitiveStyle::with_stroke(PixelState::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(50, 16), 30)
//!     .into_styled(PrimitiveStyle::with_stroke(PixelState::from(BinaryColor::On), 1))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
};

use crate::color::PixelState;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rect::FillStyle;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = PixelState;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            self.write_pixel(color, x as u8, y as u8)?;
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(if color.is_on() {
            FillStyle::Black
        } else {
            FillStyle::White
        })
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.cols), u32::from(dims.rows))
    }
}
