//! Pixel states for monochrome page memory
//!
//! The UC1601S drives one bit per pixel. A set bit is a dark (on) pixel, a
//! clear bit shows the panel background.
//!
//! ## Example
//!
//! ```
//! use uc1601s::PixelState;
//!
//! // Set bit 2 of a page byte
//! assert_eq!(PixelState::On.apply(0xA5, 2), 0xA5 | 0x04);
//!
//! // Clear bit 0
//! assert_eq!(PixelState::Off.apply(0xA5, 0), 0xA4);
//! ```

/// State of a single pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelState {
    /// Pixel off (background)
    #[default]
    Off,
    /// Pixel on (dark)
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for PixelState {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for PixelState {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

impl From<bool> for PixelState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl PixelState {
    /// Whether this state turns the pixel on
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Return `byte` with bit `bit` set or cleared according to this state
    ///
    /// Every other bit of `byte` is left untouched.
    pub fn apply(self, byte: u8, bit: u8) -> u8 {
        let mask = 1u8 << (bit & 0x07);
        match self {
            Self::On => byte | mask,
            Self::Off => byte & !mask,
        }
    }
}
