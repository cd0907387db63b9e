//! Single-cell accessors

use super::SimpleMemory;
use crate::codec::CellValue;
use crate::error::{MemoryError, Result};
use crate::layout::CELL_SIZE_BYTES;

impl SimpleMemory {
    /// Write a signed 32-bit integer to a cell
    pub fn write_int32(&mut self, index: usize, value: i32) -> Result<()> {
        self.set_cell(index, value.to_cell())
    }

    /// Read a signed 32-bit integer from a cell
    pub fn read_int32(&self, index: usize) -> Result<i32> {
        self.cell(index).map(i32::from_cell)
    }

    /// Write an unsigned 32-bit integer to a cell
    pub fn write_uint32(&mut self, index: usize, value: u32) -> Result<()> {
        self.set_cell(index, value.to_cell())
    }

    /// Read an unsigned 32-bit integer from a cell
    pub fn read_uint32(&self, index: usize) -> Result<u32> {
        self.cell(index).map(u32::from_cell)
    }

    /// Write a boolean to a cell as all ones (`true`) or all zeros (`false`)
    pub fn write_boolean(&mut self, index: usize, value: bool) -> Result<()> {
        self.set_cell(index, value.to_cell())
    }

    /// Read a boolean from a cell; any non-zero pattern is `true`
    pub fn read_boolean(&self, index: usize) -> Result<bool> {
        self.cell(index).map(bool::from_cell)
    }

    /// Write up to 4 raw bytes to a cell, zero-padding the rest
    pub fn write_4bytes(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        let cell = pad_cell(bytes)?;
        self.set_cell(index, cell)
    }

    /// Read the raw bytes of a cell
    pub fn read_4bytes(&self, index: usize) -> Result<[u8; 4]> {
        self.cell(index)
    }
}

/// Zero-pad raw input to a full cell
pub(super) fn pad_cell(bytes: &[u8]) -> Result<[u8; 4]> {
    if bytes.len() > CELL_SIZE_BYTES {
        return Err(MemoryError::OversizedCell { len: bytes.len() });
    }
    let mut cell = [0u8; 4];
    cell[..bytes.len()].copy_from_slice(bytes);
    Ok(cell)
}
