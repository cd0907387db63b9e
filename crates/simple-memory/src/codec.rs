//! Cell encodings for the scalar types the hardware side understands.
//!
//! Integers are stored little-endian. Booleans are not stored as 0/1: the
//! hardware expects every bit of the cell set for `true`, so the boolean
//! mapping is spelled out by [`encode_boolean`] and [`decode_boolean`].

use tracing::trace;

/// Cell pattern written for `true`.
pub const TRUE_PATTERN: u32 = 0xFFFF_FFFF;

/// Cell pattern written for `false`.
pub const FALSE_PATTERN: u32 = 0x0000_0000;

/// Map a boolean to its cell pattern.
pub const fn encode_boolean(value: bool) -> u32 {
    if value { TRUE_PATTERN } else { FALSE_PATTERN }
}

/// Map a cell pattern to a boolean.
///
/// Only [`FALSE_PATTERN`] reads as `false`. Hardware may emit other non-zero
/// patterns for `true`, so anything else reads as `true`.
pub fn decode_boolean(pattern: u32) -> bool {
    if pattern == FALSE_PATTERN {
        return false;
    }
    if pattern != TRUE_PATTERN {
        trace!("Non-canonical boolean pattern {pattern:#010x} read as true");
    }
    true
}

/// A value that occupies exactly one cell
pub trait CellValue: Sized {
    /// Encode the value into the bytes of one cell
    fn to_cell(&self) -> [u8; 4];

    /// Decode the value from the bytes of one cell
    fn from_cell(cell: [u8; 4]) -> Self;
}

impl CellValue for i32 {
    fn to_cell(&self) -> [u8; 4] {
        self.to_le_bytes()
    }

    fn from_cell(cell: [u8; 4]) -> Self {
        Self::from_le_bytes(cell)
    }
}

impl CellValue for u32 {
    fn to_cell(&self) -> [u8; 4] {
        self.to_le_bytes()
    }

    fn from_cell(cell: [u8; 4]) -> Self {
        Self::from_le_bytes(cell)
    }
}

impl CellValue for bool {
    fn to_cell(&self) -> [u8; 4] {
        encode_boolean(*self).to_le_bytes()
    }

    fn from_cell(cell: [u8; 4]) -> Self {
        decode_boolean(u32::from_le_bytes(cell))
    }
}

impl CellValue for [u8; 4] {
    fn to_cell(&self) -> [u8; 4] {
        *self
    }

    fn from_cell(cell: [u8; 4]) -> Self {
        cell
    }
}
