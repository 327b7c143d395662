//! UC1601S LCD Driver
//!
//! A driver for monochrome dot-matrix LCDs driven by the UC1601S controller
//! over I2C, such as the common 132x64 modules.
//!
//! The controller refreshes the glass from its own display RAM, and that RAM
//! is the only frame store: drawing calls read the affected bytes back,
//! merge the change and write them again. No frame buffer is kept on the
//! host.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Pixels, Bresenham lines (solid, blank, dotted)
//! - Rectangles with thick or rounded borders and dithered fills
//! - Built-in 5x8 font with double width, double height and inversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::i2c::{I2c, Operation};
//! use uc1601s::{
//!     Builder, CornerStyle, Dimensions, Display, FillStyle, FontSize, Interface, Inversion,
//!     LineStyle, PixelState, Rect, RectStyle, TextStyle,
//! };
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(i2c, rst);
//! let dims = match Dimensions::new(64, 132) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//!
//! let _ = display.draw_string(
//!     "Hello",
//!     0,
//!     0,
//!     TextStyle::new(FontSize::Font10x15, Inversion::Normal),
//! );
//! let _ = display.draw_line(LineStyle::Dotted(2), 0, 20, 131, 20);
//! let _ = display.draw_rect(
//!     Rect::new(10, 30, 40, 20),
//!     RectStyle {
//!         frame: LineStyle::Solid,
//!         corner: CornerStyle::Rounded,
//!         border_width: 2,
//!         fill: FillStyle::GRAY,
//!     },
//! );
//! let _ = display.set_pixel(PixelState::On, 131, 63);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Pixel states for monochrome page memory
pub mod color;
/// UC1601S command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Cursor and controller address pointer tracking
pub mod cursor;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x8 glyph table
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Line rasterizer
pub mod line;
/// Display memory layout
pub mod memory;
/// Rectangle composer
pub mod rect;
/// Text rendering
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
pub(crate) mod mock;

pub use color::PixelState;
pub use command::{BiasRatio, MappingControl, RamAddressControl};
pub use config::{Builder, Config, DEFAULT_BIAS_POTENTIOMETER, Dimensions, MAX_COLUMNS, MAX_ROWS};
pub use cursor::{AddressState, Cursor};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use font::glyph_columns;
pub use interface::InterfaceError;
pub use interface::{DEFAULT_I2C_ADDRESS, DisplayInterface, Interface};
pub use line::LineStyle;
pub use rect::{CornerStyle, FillStyle, Rect, RectStyle};
pub use text::{FontSize, GlyphOutcome, Inversion, TextStyle};
