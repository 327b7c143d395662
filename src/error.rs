//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during drawing operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! ## Example
//!
//! ```
//! use uc1601s::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Too many rows for the 4-bit page address
//! let result = Dimensions::new(200, 132);
//! assert!(result.is_err());
//! ```

use crate::config::{MAX_COLUMNS, MAX_ROWS};
use crate::interface::DisplayInterface;

/// Errors that can occur when drawing on the display
///
/// Generic over the interface type to preserve the specific bus error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C/GPIO)
    ///
    /// The current drawing call was aborted. The driver re-synchronises the
    /// controller address pointer on the next call.
    Interface(I::Error),
    /// Coordinate outside the canvas
    ///
    /// Reported before any bus traffic is issued.
    OutOfBounds {
        /// X coordinate (column)
        x: u16,
        /// Y coordinate (row)
        y: u16,
    },
    /// Character code without a glyph in the font table
    UnsupportedGlyph {
        /// Character code
        code: u32,
    },
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::OutOfBounds { x, y } => f
                .debug_struct("OutOfBounds")
                .field("x", x)
                .field("y", y)
                .finish(),
            Self::UnsupportedGlyph { code } => f
                .debug_struct("UnsupportedGlyph")
                .field("code", code)
                .finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::OutOfBounds { x, y } => write!(f, "Coordinate out of bounds: ({x}, {y})"),
            Self::UnsupportedGlyph { code } => write!(f, "No glyph for character code {code:#04x}"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before
    /// building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_ROWS}x{MAX_COLUMNS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
