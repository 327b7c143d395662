//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::PixelState;
use crate::command::{
    self, DISPLAY_DISABLE, DISPLAY_ENABLE, MAX_SCROLL_LINE, RamAddressControl,
    SET_ALL_PIXELS_NORMAL, SET_ALL_PIXELS_ON, SET_INVERSE_DISPLAY, SET_NORMAL_DISPLAY,
    SYSTEM_RESET,
};
use crate::config::{Config, Dimensions, MAX_COLUMNS};
use crate::cursor::{AddressState, Cursor};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::memory::{CellAddress, PAGE_HEIGHT, bit_of};
use crate::rect::{DitherPhase, FillStyle};

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for UC1601S
///
/// The controller's display RAM is the only frame store: every drawing call
/// reads the affected bytes back from the controller, merges the change and
/// writes them again. The driver itself only keeps the cursor and what it
/// knows about the controller's address pointer.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Current drawing position
    cursor: Cursor,
    /// Controller address pointer state
    address_state: AddressState,
    /// Last RAM address control value the controller acknowledged
    addressing_mode: Option<RamAddressControl>,
    /// Whether the display output is enabled
    is_display_on: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic is issued until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            cursor: Cursor::default(),
            address_state: AddressState::Idle,
            addressing_mode: None,
            is_display_on: false,
        }
    }

    /// Reset the controller, apply the panel configuration and clear the screen
    ///
    /// Sequence: reset pulse, system reset, 10ms settle, bias ratio, bias
    /// potentiometer, mapping control, display enable, default addressing
    /// mode, clear.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("uc1601s: init {:?}", self.config.dimensions);
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.send_command(SYSTEM_RESET)?;
        // System reset also resets the address control register
        self.addressing_mode = None;
        self.address_state = AddressState::Idle;
        delay.delay_ms(10);

        let [pot_command, pot_value] =
            command::encode_bias_potentiometer(self.config.bias_potentiometer);
        self.send_commands(&[
            self.config.bias_ratio.encode(),
            pot_command,
            pot_value,
            self.config.mapping.encode(),
            DISPLAY_ENABLE,
        ])?;
        self.is_display_on = true;

        self.set_addressing_mode(RamAddressControl::DEFAULT)?;
        self.clear()
    }

    /// Set every pixel off
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.fill(FillStyle::White)
    }

    /// Fill the whole screen with a pattern
    ///
    /// - [`FillStyle::White`]: every byte `0x00`
    /// - [`FillStyle::Black`]: every byte `0xFF`
    /// - [`FillStyle::Dither`]: columns of `0x55` / `0xAA`, flipping like a
    ///   rectangle fill does
    /// - [`FillStyle::Transparent`]: no traffic
    ///
    /// Pages are written one transfer each, starting at column 0.
    pub fn fill(&mut self, style: FillStyle) -> DisplayResult<I> {
        let pattern_of = |phase: &DitherPhase| -> Option<u8> {
            match style {
                FillStyle::Transparent => None,
                FillStyle::White => Some(0x00),
                FillStyle::Black => Some(0xFF),
                FillStyle::Dither(_) if phase.is_odd() => Some(0xAA),
                FillStyle::Dither(_) => Some(0x55),
            }
        };

        let width = usize::from(self.config.dimensions.cols);
        let mut row = [0u8; MAX_COLUMNS as usize];
        let mut phase = DitherPhase::for_fill(style);
        for byte in &mut row[..width] {
            match pattern_of(&phase) {
                Some(pattern) => *byte = pattern,
                None => return Ok(()),
            }
            phase.advance();
        }

        debug!("uc1601s: fill {:?}", style);
        self.ensure_addressing_mode(RamAddressControl::DEFAULT)?;
        for page in 0..self.config.dimensions.pages() {
            self.move_to(0, page * PAGE_HEIGHT)?;
            self.send_data(&row[..width])?;
        }
        Ok(())
    }

    /// Turn the display output on or off
    ///
    /// Display RAM is retained while the output is off.
    pub fn set_display_enabled(&mut self, enabled: bool) -> DisplayResult<I> {
        self.send_command(if enabled { DISPLAY_ENABLE } else { DISPLAY_DISABLE })?;
        self.is_display_on = enabled;
        Ok(())
    }

    /// Invert every pixel on the glass without touching display RAM
    pub fn set_inverse_display(&mut self, inverse: bool) -> DisplayResult<I> {
        self.send_command(if inverse {
            SET_INVERSE_DISPLAY
        } else {
            SET_NORMAL_DISPLAY
        })
    }

    /// Force every pixel on without touching display RAM
    pub fn set_all_pixels_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on {
            SET_ALL_PIXELS_ON
        } else {
            SET_ALL_PIXELS_NORMAL
        })
    }

    /// Set the RAM line shown on the first row of the glass
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` (with `x = 0`) if `line > 63`.
    pub fn set_scroll_line(&mut self, line: u8) -> DisplayResult<I> {
        if line > MAX_SCROLL_LINE {
            return Err(Error::OutOfBounds {
                x: 0,
                y: u16::from(line),
            });
        }
        self.send_command(command::encode_scroll_line(line))
    }

    /// Move the cursor to `(x, y)` and address the cell containing it
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` without any bus traffic if `(x, y)` is
    /// off the canvas.
    pub fn set_cursor(&mut self, x: u8, y: u8) -> DisplayResult<I> {
        self.check_bounds(x, y)?;
        self.move_to(x, y)
    }

    /// Write the RAM address control register
    ///
    /// The tracked mode only changes once the controller accepted the
    /// command.
    pub fn set_addressing_mode(&mut self, mode: RamAddressControl) -> DisplayResult<I> {
        self.send_command(mode.encode())?;
        trace!("uc1601s: addressing mode {:#04x}", mode.encode());
        self.addressing_mode = Some(mode);
        Ok(())
    }

    /// Write the RAM address control register unless it already holds `mode`
    pub fn ensure_addressing_mode(&mut self, mode: RamAddressControl) -> DisplayResult<I> {
        if self.addressing_mode == Some(mode) {
            return Ok(());
        }
        self.set_addressing_mode(mode)
    }

    /// Read back the display RAM byte holding pixel `(x, y)`
    ///
    /// Bit `y % 8` of the result is the pixel itself.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` without any bus traffic if `(x, y)` is
    /// off the canvas.
    pub fn read_cell(&mut self, x: u8, y: u8) -> Result<u8, Error<I>> {
        self.check_bounds(x, y)?;
        self.move_to(x, y)?;
        let mut dummy = [0u8; 1];
        self.read_data(&mut dummy)?;
        let mut cell = [0u8; 1];
        self.read_data(&mut cell)?;
        Ok(cell[0])
    }

    /// Set one pixel on or off
    ///
    /// Read-modify-write of the byte containing the pixel: address, dummy
    /// read, real read, re-address, write. No other pixel changes.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` without any bus traffic if `(x, y)` is
    /// off the canvas.
    pub fn set_pixel(&mut self, state: PixelState, x: u8, y: u8) -> DisplayResult<I> {
        self.check_bounds(x, y)?;
        self.write_pixel(state, x, y)
    }

    /// Current cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// What the driver knows about the controller address pointer
    pub fn address_state(&self) -> AddressState {
        self.address_state
    }

    /// RAM address control value last acknowledged by the controller
    ///
    /// `None` before [`init`](Self::init) and right after a system reset.
    pub fn addressing_mode(&self) -> Option<RamAddressControl> {
        self.addressing_mode
    }

    /// Whether the display output is enabled
    pub fn is_display_on(&self) -> bool {
        self.is_display_on
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    pub(crate) fn check_bounds(&self, x: u8, y: u8) -> DisplayResult<I> {
        if self.config.dimensions.contains(x, y) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x: u16::from(x),
                y: u16::from(y),
            })
        }
    }

    /// Pixel read-modify-write without the bounds check
    pub(crate) fn write_pixel(&mut self, state: PixelState, x: u8, y: u8) -> DisplayResult<I> {
        self.move_to(x, y)?;
        let mut dummy = [0u8; 1];
        self.read_data(&mut dummy)?;
        let mut cell = [0u8; 1];
        self.read_data(&mut cell)?;

        cell[0] = state.apply(cell[0], bit_of(y));

        // The reads moved the pointer off the cell
        self.move_to(x, y)?;
        self.send_data(&cell)
    }

    /// Store the cursor and address the cell containing it
    pub(crate) fn move_to(&mut self, x: u8, y: u8) -> DisplayResult<I> {
        self.cursor = Cursor::new(x, y);
        self.address(CellAddress::of_pixel(x, y))
    }

    /// Step the cursor one column right
    pub(crate) fn advance_cursor_column(&mut self) {
        self.cursor.x = self.cursor.x.saturating_add(1);
    }

    pub(crate) fn address(&mut self, cell: CellAddress) -> DisplayResult<I> {
        let [lsb, msb] = command::encode_column_address(cell.column);
        self.send_commands(&[command::encode_page_address(cell.page), lsb, msb])?;
        self.address_state = AddressState::AddressSet;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send a command sequence in one transfer
    fn send_commands(&mut self, cmds: &[u8]) -> DisplayResult<I> {
        self.interface.send_commands(cmds).map_err(Error::Interface)
    }

    /// Send display data to the controller
    pub(crate) fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)?;
        self.address_state = AddressState::Idle;
        Ok(())
    }

    /// Read display data from the controller
    pub(crate) fn read_data(&mut self, buffer: &mut [u8]) -> DisplayResult<I> {
        self.interface.read_data(buffer).map_err(Error::Interface)?;
        self.address_state = AddressState::PostReadShifted;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{self, DUMMY_BYTE, Event, MockDelay};
    use alloc::vec;

    #[test]
    fn test_init_sequence() {
        let mut display = mock::default_display();
        display.init(&mut MockDelay).unwrap();

        let mock = display.interface();
        assert_eq!(mock.resets, 1);
        assert_eq!(mock.events[0], Event::Command(vec![0xE2]));
        assert_eq!(
            mock.events[1],
            Event::Command(vec![0xE8, 0x81, 120, 0xC0, 0xAF])
        );
        assert_eq!(mock.events[2], Event::Command(vec![0x88]));
        assert_eq!(mock.potentiometer, Some(120));
        assert_eq!(mock.mode, 0x88);
        assert!(display.is_display_on());
        assert_eq!(display.addressing_mode(), Some(RamAddressControl::DEFAULT));
    }

    #[test]
    fn test_init_lcd154_preset() {
        let config = crate::Builder::lcd154()
            .dimensions(Dimensions::new(64, 132).unwrap())
            .build()
            .unwrap();
        let mut display = Display::new(mock::MockController::new(64, 132), config);
        display.init(&mut MockDelay).unwrap();
        assert_eq!(
            display.interface().events[1],
            Event::Command(vec![0xEB, 0x81, 120, 0xC2, 0xAF])
        );
    }

    #[test]
    fn test_init_clears_ram() {
        let mut display = mock::default_display();
        display.interface_mut().fill_ram(0x5A);
        display.init(&mut MockDelay).unwrap();

        let mock = display.interface();
        for page in 0..8 {
            for column in 0..132 {
                assert_eq!(mock.cell(page, column), 0x00);
            }
        }
        assert_eq!(mock.out_of_range_writes, 0);
    }

    #[test]
    fn test_fill_writes_one_transfer_per_page() {
        let mut display = mock::display(22, 132);
        display.fill(FillStyle::Black).unwrap();

        let mock = display.interface();
        let writes = mock.data_writes();
        assert_eq!(writes.len(), 3);
        assert!(writes.iter().all(|w| w.len() == 132 && w.iter().all(|&b| b == 0xFF)));
        assert_eq!(mock.cell(2, 131), 0xFF);
        assert_eq!(mock.out_of_range_writes, 0);
    }

    #[test]
    fn test_fill_dither_alternates_columns() {
        let mut display = mock::default_display();
        display.fill(FillStyle::GRAY).unwrap();

        let mock = display.interface();
        assert_eq!(mock.cell(0, 0), 0x55);
        assert_eq!(mock.cell(0, 1), 0xAA);
        assert_eq!(mock.cell(0, 2), 0x55);
        assert_eq!(mock.cell(7, 131), 0xAA);
    }

    #[test]
    fn test_fill_transparent_is_silent() {
        let mut display = mock::default_display();
        display.fill(FillStyle::Transparent).unwrap();
        assert!(display.interface().events.is_empty());
    }

    #[test]
    fn test_fill_restores_default_mode() {
        let mut display = mock::default_display();
        display
            .set_addressing_mode(RamAddressControl::PAGE_BURST)
            .unwrap();
        display.clear().unwrap();
        assert_eq!(display.interface().mode, 0x88);
        assert_eq!(display.interface().out_of_range_writes, 0);
    }

    #[test]
    fn test_set_pixel_round_trip() {
        let mut display = mock::default_display();
        display.interface_mut().set_cell(0, 10, 0xA5);

        display.set_pixel(PixelState::On, 10, 1).unwrap();
        assert_eq!(display.interface().cell(0, 10), 0xA7);

        display.set_pixel(PixelState::Off, 10, 1).unwrap();
        assert_eq!(display.interface().cell(0, 10), 0xA5);
    }

    #[test]
    fn test_set_pixel_round_trip_every_bit() {
        let background = |page: u8, column: u8| 0x5Au8 ^ column.wrapping_mul(7) ^ (page << 4);
        let mut display = mock::default_display();
        for page in 0..8 {
            for column in 0..132 {
                display
                    .interface_mut()
                    .set_cell(page, column, background(page, column));
            }
        }

        for page in [0u8, 3, 7] {
            for column in [0u8, 1, 65, 131] {
                let original = background(page, column);
                for bit in 0..8 {
                    let y = page * 8 + bit;
                    let was_on = original & (1 << bit) != 0;

                    display
                        .set_pixel(PixelState::from(!was_on), column, y)
                        .unwrap();
                    let mock = display.interface();
                    assert_eq!(mock.cell(page, column), original ^ (1 << bit), "({column}, {y})");
                    if column > 0 {
                        assert_eq!(mock.cell(page, column - 1), background(page, column - 1));
                    }
                    if column < 131 {
                        assert_eq!(mock.cell(page, column + 1), background(page, column + 1));
                    }

                    display.set_pixel(PixelState::from(was_on), column, y).unwrap();
                    assert_eq!(display.interface().cell(page, column), original);
                }
            }
        }

        let mock = display.interface();
        for page in 0..8 {
            for column in 0..132 {
                assert_eq!(mock.cell(page, column), background(page, column));
            }
        }
        assert_eq!(mock.out_of_range_writes, 0);
    }

    #[test]
    fn test_set_pixel_bus_sequence() {
        let mut display = mock::default_display();
        display.interface_mut().set_cell(2, 0x2A, 0x01);

        display.set_pixel(PixelState::On, 0x2A, 19).unwrap();

        assert_eq!(
            display.interface().events,
            vec![
                Event::Command(vec![0xB2, 0x0A, 0x12]),
                Event::Read(1),
                Event::Read(1),
                Event::Command(vec![0xB2, 0x0A, 0x12]),
                Event::Data(vec![0x09]),
            ]
        );
        assert_eq!(display.cursor(), Cursor::new(0x2A, 19));
        assert_eq!(display.address_state(), AddressState::Idle);
    }

    #[test]
    fn test_set_pixel_leaves_neighbours() {
        let mut display = mock::default_display();
        display.interface_mut().fill_ram(0x00);
        display.set_pixel(PixelState::On, 5, 5).unwrap();

        let mock = display.interface();
        assert_eq!(mock.cell(0, 5), 0x20);
        assert_eq!(mock.cell(0, 4), 0x00);
        assert_eq!(mock.cell(0, 6), 0x00);
        assert_eq!(mock.cell(1, 5), 0x00);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_has_no_traffic() {
        let mut display = mock::default_display();
        let result = display.set_pixel(PixelState::On, 132, 0);
        assert!(matches!(result, Err(Error::OutOfBounds { x: 132, y: 0 })));
        let result = display.set_pixel(PixelState::On, 0, 64);
        assert!(matches!(result, Err(Error::OutOfBounds { x: 0, y: 64 })));
        assert!(display.interface().events.is_empty());
    }

    #[test]
    fn test_read_cell_skips_dummy_byte() {
        let mut display = mock::default_display();
        display.interface_mut().set_cell(7, 131, 0x3C);

        assert_eq!(display.read_cell(131, 63).unwrap(), 0x3C);
        assert_ne!(0x3C, DUMMY_BYTE);
        assert_eq!(display.address_state(), AddressState::PostReadShifted);
    }

    #[test]
    fn test_address_state_transitions() {
        let mut display = mock::default_display();
        assert_eq!(display.address_state(), AddressState::Idle);

        display.set_cursor(3, 9).unwrap();
        assert_eq!(display.address_state(), AddressState::AddressSet);
        assert_eq!(display.cursor(), Cursor::new(3, 9));

        let mut buffer = [0u8; 2];
        display.read_data(&mut buffer).unwrap();
        assert_eq!(display.address_state(), AddressState::PostReadShifted);

        display.set_cursor(3, 9).unwrap();
        display.send_data(&[0x00]).unwrap();
        assert_eq!(display.address_state(), AddressState::Idle);
    }

    #[test]
    fn test_interface_error_is_propagated() {
        let mut display = mock::default_display();
        display.interface_mut().fail_reads = true;

        let result = display.set_pixel(PixelState::On, 1, 1);
        assert!(matches!(result, Err(Error::Interface(mock::MockError))));
        // Only the first address was sent
        assert_eq!(display.interface().events.len(), 1);
    }

    #[test]
    fn test_init_stops_on_reset_failure() {
        let mut display = mock::default_display();
        display.interface_mut().fail_reset = true;

        let result = display.init(&mut MockDelay);
        assert!(matches!(result, Err(Error::Interface(mock::MockError))));
        assert!(display.interface().events.is_empty());
        assert!(!display.is_display_on());
        assert_eq!(display.addressing_mode(), None);
    }

    #[test]
    fn test_failed_mode_change_is_not_tracked() {
        let mut display = mock::default_display();
        display.interface_mut().fail_writes = true;
        assert!(
            display
                .set_addressing_mode(RamAddressControl::DEFAULT)
                .is_err()
        );
        assert_eq!(display.addressing_mode(), None);

        display.interface_mut().fail_writes = false;
        display
            .ensure_addressing_mode(RamAddressControl::DEFAULT)
            .unwrap();
        assert_eq!(display.interface().commands(), vec![0x88]);

        // Already in that mode: nothing sent
        display
            .ensure_addressing_mode(RamAddressControl::DEFAULT)
            .unwrap();
        assert_eq!(display.interface().commands(), vec![0x88]);
    }

    #[test]
    fn test_controller_switches() {
        let mut display = mock::default_display();
        display.set_display_enabled(false).unwrap();
        display.set_inverse_display(true).unwrap();
        display.set_inverse_display(false).unwrap();
        display.set_all_pixels_on(true).unwrap();
        display.set_all_pixels_on(false).unwrap();
        display.set_scroll_line(5).unwrap();
        assert_eq!(
            display.interface().commands(),
            vec![0xAE, 0xA7, 0xA6, 0xA5, 0xA4, 0x45]
        );
        assert!(!display.is_display_on());
    }

    #[test]
    fn test_scroll_line_out_of_range() {
        let mut display = mock::default_display();
        assert!(matches!(
            display.set_scroll_line(64),
            Err(Error::OutOfBounds { x: 0, y: 64 })
        ));
        assert!(display.interface().events.is_empty());
    }
}
