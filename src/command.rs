//! UC1601S command definitions
//!
//! This module defines the command bytes understood by the UC1601S LCD
//! controller together with small encoders for the commands that carry an
//! operand packed into the command byte itself.
//!
//! Commands are sent over I2C to the controller's base address; pixel data is
//! sent to the same address with the CD bit set (see
//! [`Interface`](crate::Interface)).
//!
//! ## Example
//!
//! ```
//! use uc1601s::command::{self, RamAddressControl};
//!
//! // Address the cell at page 3, column 0x42
//! let page = command::encode_page_address(3);
//! let [lsb, msb] = command::encode_column_address(0x42);
//! assert_eq!([page, lsb, msb], [0xB3, 0x02, 0x14]);
//!
//! // Column-first, no wrap-around, normal page direction
//! assert_eq!(RamAddressControl::DEFAULT.encode(), 0x88);
//! ```

// System control commands

/// System reset command (0xE2)
///
/// Resets the controller registers. Display RAM is not cleared.
pub const SYSTEM_RESET: u8 = 0xE2;

/// Display enable command (0xAF)
pub const DISPLAY_ENABLE: u8 = 0xAF;

/// Display disable command (0xAE)
pub const DISPLAY_DISABLE: u8 = 0xAE;

/// Set all pixels on (0xA5)
///
/// Forces every pixel on without touching display RAM.
pub const SET_ALL_PIXELS_ON: u8 = 0xA5;

/// Show display RAM contents (0xA4), cancels [`SET_ALL_PIXELS_ON`]
pub const SET_ALL_PIXELS_NORMAL: u8 = 0xA4;

/// Set inverse display (0xA7)
pub const SET_INVERSE_DISPLAY: u8 = 0xA7;

/// Set normal (non-inverted) display (0xA6)
pub const SET_NORMAL_DISPLAY: u8 = 0xA6;

// RAM addressing commands

/// Set page address base (0xB0)
///
/// The page index is carried in bits [3:0].
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

/// Set column address LSB base (0x00)
///
/// Column address bits CA[3:0] are carried in bits [3:0].
pub const SET_COLUMN_ADDRESS_LSB: u8 = 0x00;

/// Set column address MSB base (0x10)
///
/// Column address bits CA[7:4] are carried in bits [3:0].
pub const SET_COLUMN_ADDRESS_MSB: u8 = 0x10;

/// Set RAM address control base (0x88)
///
/// Bit 0: wrap-around, bit 1: page-first increment, bit 2: reverse page
/// direction. See [`RamAddressControl`].
pub const SET_RAM_ADDRESS_CONTROL: u8 = 0x88;

/// Set scroll line base (0x40)
///
/// The start line is carried in bits [5:0].
pub const SET_SCROLL_LINE: u8 = 0x40;

// Panel configuration commands

/// Set LCD bias ratio base (0xE8)
///
/// The ratio selector is carried in bits [1:0]. See [`BiasRatio`].
pub const SET_BIAS_RATIO: u8 = 0xE8;

/// Set bias potentiometer (0x81)
///
/// Double-byte command, the second byte is the potentiometer value.
pub const SET_BIAS_POTENTIOMETER: u8 = 0x81;

/// Set mapping control base (0xC0)
///
/// Bit 1 mirrors X (SEG order), bit 2 mirrors Y (COM order).
pub const SET_MAPPING_CONTROL: u8 = 0xC0;

/// Highest page index the page address command can carry
pub const MAX_PAGE_ADDRESS: u8 = 0x0F;

/// Highest line the scroll line command can carry
pub const MAX_SCROLL_LINE: u8 = 0x3F;

/// Encode a set page address command
///
/// Valid pages are `0..=15`; higher bits are discarded.
pub const fn encode_page_address(page: u8) -> u8 {
    SET_PAGE_ADDRESS | (page & MAX_PAGE_ADDRESS)
}

/// Encode the two set column address commands (LSB nibble first)
///
/// Any `u8` column is representable.
pub const fn encode_column_address(column: u8) -> [u8; 2] {
    [
        SET_COLUMN_ADDRESS_LSB | (column & 0x0F),
        SET_COLUMN_ADDRESS_MSB | (column >> 4),
    ]
}

/// Encode a set scroll line command
///
/// Valid lines are `0..=63`; higher bits are discarded.
pub const fn encode_scroll_line(line: u8) -> u8 {
    SET_SCROLL_LINE | (line & MAX_SCROLL_LINE)
}

/// Encode the double-byte bias potentiometer command
pub const fn encode_bias_potentiometer(value: u8) -> [u8; 2] {
    [SET_BIAS_POTENTIOMETER, value]
}

/// Order in which the RAM address pointer auto-increments
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IncrementOrder {
    /// Column address increments first
    #[default]
    ColumnFirst,
    /// Page address increments first
    PageFirst,
}

/// Page increment direction (used with wrap-around)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageDirection {
    /// Pages increment
    #[default]
    Normal,
    /// Pages decrement
    Reverse,
}

/// RAM address control register contents
///
/// Three independent flags packed into a single command byte:
///
/// | Bit | Flag                         |
/// |-----|------------------------------|
/// | 0   | wrap-around enable (WA)      |
/// | 1   | page-first increment (IO)    |
/// | 2   | reverse page direction (PID) |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RamAddressControl {
    /// Wrap the pointer around at the end of a column/page
    pub wrap_around: bool,
    /// Auto-increment order
    pub order: IncrementOrder,
    /// Page increment direction
    pub direction: PageDirection,
}

impl RamAddressControl {
    /// Mode the driver leaves the controller in between drawing calls
    pub const DEFAULT: Self = Self {
        wrap_around: false,
        order: IncrementOrder::ColumnFirst,
        direction: PageDirection::Normal,
    };

    /// Mode used for batched vertical slice reads and writes
    pub const PAGE_BURST: Self = Self {
        wrap_around: true,
        order: IncrementOrder::PageFirst,
        direction: PageDirection::Normal,
    };

    /// Pack the flags into a command byte
    pub const fn encode(self) -> u8 {
        let mut command = SET_RAM_ADDRESS_CONTROL;
        if self.wrap_around {
            command |= 0x01;
        }
        if matches!(self.order, IncrementOrder::PageFirst) {
            command |= 0x02;
        }
        if matches!(self.direction, PageDirection::Reverse) {
            command |= 0x04;
        }
        command
    }
}

/// LCD bias ratio selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BiasRatio {
    /// Bias ratio 6
    #[default]
    Ratio6 = 0x00,
    /// Bias ratio 7
    Ratio7 = 0x01,
    /// Bias ratio 8
    Ratio8 = 0x02,
    /// Bias ratio 9
    Ratio9 = 0x03,
}

impl BiasRatio {
    /// Encode the set bias ratio command
    pub const fn encode(self) -> u8 {
        SET_BIAS_RATIO | self as u8
    }
}

/// Mapping control register contents (SEG/COM mirroring)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MappingControl {
    /// Reverse SEG (column) order
    pub mirror_x: bool,
    /// Reverse COM (row) order
    pub mirror_y: bool,
}

impl MappingControl {
    /// Encode the set mapping control command
    pub const fn encode(self) -> u8 {
        let mut command = SET_MAPPING_CONTROL;
        if self.mirror_x {
            command |= 0x02;
        }
        if self.mirror_y {
            command |= 0x04;
        }
        command
    }
}
