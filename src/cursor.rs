//! Cursor and controller address pointer tracking

/// Drawing position owned by a [`Display`](crate::Display)
///
/// The cursor is the pixel the next addressed operation targets. Text
/// rendering advances `x` by one per emitted column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column
    pub x: u8,
    /// Row
    pub y: u8,
}

impl Cursor {
    /// Create a cursor at `(x, y)`
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// What the driver knows about the controller's RAM address pointer
///
/// Reading display data moves the pointer, so a cell that was just read
/// must be addressed again before it is written.
///
/// ```text
/// Idle --address--> AddressSet --read--> PostReadShifted
///   ^                    |                    |
///   +-------write--------+----address---------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressState {
    /// No address issued since the last write (or ever)
    #[default]
    Idle,
    /// Pointer sits on the cell that was last addressed
    AddressSet,
    /// A read has auto-incremented the pointer past the addressed cell
    PostReadShifted,
}
