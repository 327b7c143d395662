//! Display memory layout
//!
//! The controller memory is organised in pages of 8 rows. Each page holds one
//! byte per column, and bit `n` of that byte is the pixel at row
//! `page * 8 + n`. Individual pixels are not addressable; every pixel change
//! goes through the byte cell that contains it.
//!
//! ```
//! use uc1601s::memory::{CellAddress, bit_of, page_of};
//!
//! assert_eq!(page_of(13), 1);
//! assert_eq!(bit_of(13), 5);
//! assert_eq!(CellAddress::of_pixel(40, 13), CellAddress { page: 1, column: 40 });
//! ```

/// Rows covered by one page
pub const PAGE_HEIGHT: u8 = 8;

/// Page holding row `y`
pub const fn page_of(y: u8) -> u8 {
    y / PAGE_HEIGHT
}

/// Bit position of row `y` inside its page byte
pub const fn bit_of(y: u8) -> u8 {
    y % PAGE_HEIGHT
}

/// Address of one byte cell in display memory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellAddress {
    /// Page index
    pub page: u8,
    /// Column index
    pub column: u8,
}

impl CellAddress {
    /// Cell containing pixel `(x, y)`
    pub const fn of_pixel(x: u8, y: u8) -> Self {
        Self {
            page: page_of(y),
            column: x,
        }
    }
}
