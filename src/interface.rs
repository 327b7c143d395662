//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the UC1601S controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The UC1601S in I2C mode requires:
//! - I2C bus (SDA + SCL)
//! - 1 GPIO pin:
//!   - **RST**: Reset (output, active low)
//!
//! The command/data (CD) select is not a pin in I2C mode. It is bit 0 of the
//! 7-bit slave address: commands go to the base address, display data is
//! written to and read from `base | 0x01`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::i2c::{I2c, Operation};
//! use uc1601s::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! let mut interface = Interface::new(MockI2c, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command
//! let _ = interface.send_commands(&[0xE2]); // System reset
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//!
//! // Read back display data (first byte after addressing is a dummy)
//! let mut buffer = [0u8; 2];
//! let _ = interface.read_data(&mut buffer);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the command/data channel to the UC1601S controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport that can tell command bytes from display data bytes and read
/// display data back.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself for other transports (e.g. a parallel bus) or for tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send command bytes to the controller in one transfer
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a single command byte
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.send_commands(&[command])
    }

    /// Write display data bytes at the controller's address pointer
    ///
    /// The pointer auto-increments once per byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Read display data bytes, oldest first
    ///
    /// The bytes are returned uninterpreted; the first byte read after an
    /// address change is the controller's dummy byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn read_data(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over I2C and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<I2cErr, PinErr> {
    /// I2C communication error
    I2c(I2cErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<I2cErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<I2cErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<I2cErr, PinErr> {}

/// Default 7-bit I2C base address (command channel)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x38;

/// Address bit selecting the display data channel
pub const DATA_ADDRESS_BIT: u8 = 0x01;

/// Hardware interface implementation for UC1601S
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C and GPIO traits.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<I2C, RST> {
    /// I2C bus
    i2c: I2C,
    /// Reset pin (active low)
    rst: RST,
    /// 7-bit base address (CD bit clear)
    address: u8,
}

impl<I2C, RST> Interface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    /// Create a new Interface using [`DEFAULT_I2C_ADDRESS`]
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `rst` - Reset pin (output, active low)
    pub fn new(i2c: I2C, rst: RST) -> Self {
        Self {
            i2c,
            rst,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Set the 7-bit base address
    ///
    /// Modules strap the address pins differently; bit 0 must stay clear.
    pub fn set_address(&mut self, address: u8) -> &mut Self {
        self.address = address & !DATA_ADDRESS_BIT;
        self
    }

    /// Get the 7-bit base address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus and pin
    pub fn release(self) -> (I2C, RST) {
        (self.i2c, self.rst)
    }

    fn data_address(&self) -> u8 {
        self.address | DATA_ADDRESS_BIT
    }
}

impl<I2C, RST> DisplayInterface for Interface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    type Error = InterfaceError<I2C::Error, RST::Error>;

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, commands)
            .map_err(InterfaceError::I2c)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        let address = self.data_address();
        self.i2c.write(address, data).map_err(InterfaceError::I2c)
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> InterfaceResult<(), Self::Error> {
        let address = self.data_address();
        self.i2c.read(address, buffer).map_err(InterfaceError::I2c)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // Reset sequence: LOW -> wait 10ms -> HIGH -> wait 10ms
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        Ok(())
    }
}
