//! Display configuration types and builder

use crate::command::{BiasRatio, MappingControl};
pub use crate::error::BuilderError;
use crate::memory::PAGE_HEIGHT;

/// Maximum number of rows addressable through the 4-bit page address
pub const MAX_ROWS: u16 = 128;

/// Maximum number of columns supported by the driver
///
/// The column address is sent as a pair of nibbles.
pub const MAX_COLUMNS: u16 = 240;

/// Default bias potentiometer value
pub const DEFAULT_BIAS_POTENTIOMETER: u8 = 120;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows (height in pixels)
    pub rows: u16,
    /// Number of columns (width in pixels)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows > MAX_ROWS
    /// - cols == 0 or cols > MAX_COLUMNS
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of 8-row pages covering the display
    pub fn pages(&self) -> u8 {
        // rows <= MAX_ROWS, so at most 16 pages
        self.rows.div_ceil(u16::from(PAGE_HEIGHT)) as u8
    }

    /// Highest addressable column
    pub fn last_column(&self) -> u8 {
        (self.cols - 1) as u8
    }

    /// Whether `(x, y)` lies on the canvas
    pub fn contains(&self, x: u8, y: u8) -> bool {
        u16::from(x) < self.cols && u16::from(y) < self.rows
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// LCD bias ratio
    pub bias_ratio: BiasRatio,
    /// Bias potentiometer value (contrast)
    pub bias_potentiometer: u8,
    /// SEG/COM mirroring
    pub mapping: MappingControl,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use uc1601s::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(64, 132) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).bias_potentiometer(100).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.bias_potentiometer, 100);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// LCD bias ratio
    bias_ratio: BiasRatio,
    /// Bias potentiometer value
    bias_potentiometer: u8,
    /// SEG/COM mirroring
    mapping: MappingControl,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            bias_ratio: BiasRatio::Ratio6,
            bias_potentiometer: DEFAULT_BIAS_POTENTIOMETER,
            mapping: MappingControl::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preset for the 1.54" 132x64 module
    ///
    /// Bias ratio 9 with the column order mirrored.
    pub fn lcd154() -> Self {
        Self::default()
            .bias_ratio(BiasRatio::Ratio9)
            .mirror_x(true)
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set LCD bias ratio
    pub fn bias_ratio(mut self, ratio: BiasRatio) -> Self {
        self.bias_ratio = ratio;
        self
    }

    /// Set bias potentiometer value
    pub fn bias_potentiometer(mut self, value: u8) -> Self {
        self.bias_potentiometer = value;
        self
    }

    /// Mirror the column (SEG) order
    pub fn mirror_x(mut self, mirror: bool) -> Self {
        self.mapping.mirror_x = mirror;
        self
    }

    /// Mirror the row (COM) order
    pub fn mirror_y(mut self, mirror: bool) -> Self {
        self.mapping.mirror_y = mirror;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            bias_ratio: self.bias_ratio,
            bias_potentiometer: self.bias_potentiometer,
            mapping: self.mapping,
        })
    }
}
