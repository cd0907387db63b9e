//! Transport header stored in the prefix region.
//!
//! Layout (one field per cell, little-endian):
//! - Cell 0: member id (u32) used by the transport to route the call
//! - Cell 1: number of data cells (u32)
//! - Cell 2: reserved, always zero

use std::io::Cursor;

use binrw::{BinRead, BinWrite};

use crate::error::{MemoryError, Result, ensure_batch_len};
use crate::layout::CELL_SIZE_BYTES;

/// Number of cells occupied by [`MemoryHeader`].
pub const HEADER_CELL_COUNT: usize = 3;

/// Size of [`MemoryHeader`] in bytes.
pub const HEADER_SIZE: usize = HEADER_CELL_COUNT * CELL_SIZE_BYTES;

/// Header written in front of the data region
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
#[brw(little)]
pub struct MemoryHeader {
    /// Routing identifier of the member being called
    pub member_id: u32,
    /// Number of data cells that follow the prefix
    pub cell_count: u32,
    /// Reserved, written as zero
    pub reserved: u32,
}

impl MemoryHeader {
    /// Create a header for `cell_count` data cells
    pub const fn new(member_id: u32, cell_count: u32) -> Self {
        Self {
            member_id,
            cell_count,
            reserved: 0,
        }
    }

    /// Create a header for a data region of `cell_count` cells.
    ///
    /// Fails when the count does not fit the 32-bit length field.
    pub fn for_cells(member_id: u32, cell_count: usize) -> Result<Self> {
        let cell_count =
            u32::try_from(cell_count).map_err(|_| MemoryError::HeaderOverflow { cell_count })?;
        Ok(Self::new(member_id, cell_count))
    }

    /// Decode a header from the start of a prefix region
    pub fn parse(prefix: &[u8]) -> Result<Self> {
        if prefix.len() < HEADER_SIZE {
            return Err(MemoryError::HeaderUnavailable {
                prefix_cell_count: prefix.len() / CELL_SIZE_BYTES,
            });
        }
        let mut cursor = Cursor::new(&prefix[..HEADER_SIZE]);
        Ok(Self::read(&mut cursor)?)
    }

    /// Encode the header into its wire bytes
    pub fn build(&self) -> Result<[u8; HEADER_SIZE]> {
        let mut buffer = [0u8; HEADER_SIZE];
        let mut cursor = Cursor::new(&mut buffer[..]);
        self.write(&mut cursor)?;
        Ok(buffer)
    }

    /// Check the declared payload length against a data region
    pub fn validate(&self, cell_count: usize) -> Result<()> {
        ensure_batch_len(cell_count, self.cell_count as usize)
    }
}
