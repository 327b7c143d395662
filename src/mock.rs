//! In-memory UC1601S model for unit tests
//!
//! Interprets the command stream the way the controller does: page and
//! column address commands move the RAM pointer, the RAM address control
//! register picks the auto-increment order and wrap-around, and the first
//! data read after an address change returns a dummy byte.

use alloc::vec;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::config::{Builder, Dimensions};
use crate::display::Display;
use crate::interface::DisplayInterface;

/// Value returned by the dummy read
pub(crate) const DUMMY_BYTE: u8 = 0xEE;

/// RAM address control register after a system reset (wrap-around on)
pub(crate) const RESET_MODE: u8 = 0x89;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Command(Vec<u8>),
    Data(Vec<u8>),
    Read(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MockError;

pub(crate) struct MockController {
    pages: u8,
    cols: u8,
    ram: Vec<u8>,
    page: u8,
    column: u8,
    dummy_pending: bool,
    awaiting_operand: bool,
    pub(crate) mode: u8,
    pub(crate) potentiometer: Option<u8>,
    pub(crate) events: Vec<Event>,
    pub(crate) out_of_range_writes: usize,
    pub(crate) fail_reads: bool,
    pub(crate) fail_writes: bool,
    pub(crate) fail_reset: bool,
    pub(crate) resets: usize,
}

impl MockController {
    pub(crate) fn new(rows: u16, cols: u16) -> Self {
        let pages = rows.div_ceil(8) as u8;
        let cols = cols as u8;
        Self {
            pages,
            cols,
            ram: vec![0; usize::from(pages) * usize::from(cols)],
            page: 0,
            column: 0,
            dummy_pending: true,
            awaiting_operand: false,
            mode: RESET_MODE,
            potentiometer: None,
            events: Vec::new(),
            out_of_range_writes: 0,
            fail_reads: false,
            fail_writes: false,
            fail_reset: false,
            resets: 0,
        }
    }

    fn index(&self, page: u8, column: u8) -> Option<usize> {
        (page < self.pages && column < self.cols)
            .then(|| usize::from(page) * usize::from(self.cols) + usize::from(column))
    }

    pub(crate) fn cell(&self, page: u8, column: u8) -> u8 {
        self.index(page, column).map_or(0, |i| self.ram[i])
    }

    pub(crate) fn set_cell(&mut self, page: u8, column: u8, value: u8) {
        if let Some(i) = self.index(page, column) {
            self.ram[i] = value;
        }
    }

    pub(crate) fn pixel(&self, x: u8, y: u8) -> bool {
        self.cell(y / 8, x) & (1 << (y % 8)) != 0
    }

    pub(crate) fn fill_ram(&mut self, value: u8) {
        self.ram.fill(value);
    }

    /// All command bytes in the order they were sent
    pub(crate) fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Command(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub(crate) fn data_writes(&self) -> Vec<Vec<u8>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Data(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    fn advance(&mut self) {
        let wrap = self.mode & 0x01 != 0;
        let page_first = self.mode & 0x02 != 0;
        let reverse = self.mode & 0x04 != 0;
        let last_page = self.pages - 1;

        if page_first {
            let at_end = if reverse { self.page == 0 } else { self.page >= last_page };
            if wrap && at_end {
                self.page = if reverse { last_page } else { 0 };
                self.column = self.column.saturating_add(1);
            } else if wrap && reverse {
                self.page -= 1;
            } else {
                self.page = self.page.saturating_add(1);
            }
        } else if wrap && self.column >= self.cols - 1 {
            self.column = 0;
            self.page = match (reverse, self.page) {
                (true, 0) => last_page,
                (true, page) => page - 1,
                (false, page) if page >= last_page => 0,
                (false, page) => page + 1,
            };
        } else {
            self.column = self.column.saturating_add(1);
        }
    }

    fn execute(&mut self, byte: u8) {
        if self.awaiting_operand {
            self.potentiometer = Some(byte);
            self.awaiting_operand = false;
            return;
        }
        match byte {
            0x00..=0x0F => {
                self.column = (self.column & 0xF0) | byte;
                self.dummy_pending = true;
            }
            0x10..=0x1F => {
                self.column = (self.column & 0x0F) | ((byte & 0x0F) << 4);
                self.dummy_pending = true;
            }
            0xB0..=0xBF => {
                self.page = byte & 0x0F;
                self.dummy_pending = true;
            }
            0x88..=0x8F => self.mode = byte,
            0x81 => self.awaiting_operand = true,
            0xE2 => {
                self.mode = RESET_MODE;
                self.page = 0;
                self.column = 0;
                self.dummy_pending = true;
            }
            _ => {}
        }
    }
}

impl DisplayInterface for MockController {
    type Error = MockError;

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockError);
        }
        self.events.push(Event::Command(commands.to_vec()));
        for &byte in commands {
            self.execute(byte);
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockError);
        }
        self.events.push(Event::Data(data.to_vec()));
        for &byte in data {
            match self.index(self.page, self.column) {
                Some(i) => self.ram[i] = byte,
                None => self.out_of_range_writes += 1,
            }
            self.advance();
        }
        self.dummy_pending = true;
        Ok(())
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail_reads {
            return Err(MockError);
        }
        self.events.push(Event::Read(buffer.len()));
        for byte in buffer.iter_mut() {
            if self.dummy_pending {
                *byte = DUMMY_BYTE;
                self.dummy_pending = false;
            } else {
                *byte = self.cell(self.page, self.column);
                self.advance();
            }
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        if self.fail_reset {
            return Err(MockError);
        }
        self.resets += 1;
        Ok(())
    }
}

pub(crate) struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Display of `rows` x `cols` backed by a fresh controller model
pub(crate) fn display(rows: u16, cols: u16) -> Display<MockController> {
    let config = Builder::new()
        .dimensions(Dimensions::new(rows, cols).unwrap())
        .build()
        .unwrap();
    Display::new(MockController::new(rows, cols), config)
}

/// The default 64 x 132 panel
pub(crate) fn default_display() -> Display<MockController> {
    display(64, 132)
}
