//! Cell-addressed memory shared with hardware.
//!
//! Scalar accessors live in `scalar`, accessors over cell runs in `vector`.

mod scalar;
mod vector;

use std::cell::Cell;
use std::marker::PhantomData;
use std::ops::Range;

use tracing::debug;

use crate::error::{MemoryError, Result};
use crate::header::{HEADER_CELL_COUNT, MemoryHeader};
use crate::layout::{CELL_SIZE_BYTES, MemoryLayout};

/// Memory shared between software and hardware implementations.
///
/// Owns one contiguous buffer of `prefix + cell_count` cells. Accessors
/// address data cells by index; the prefix region is only reachable through
/// the header accessors and the raw transport bytes.
///
/// # Thread safety
///
/// Not safe for concurrent use. A `SimpleMemory` is `Send`, so fan-out code
/// can move one instance into each worker, but it is not `Sync`:
///
/// ```compile_fail
/// use simple_memory::SimpleMemory;
///
/// fn assert_sync<T: Sync>(_: &T) {}
/// assert_sync(&SimpleMemory::new(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleMemory {
    /// Prefix and data cells. Held as words so the buffer is 4-byte aligned;
    /// cell contents are always read and written through their byte encoding.
    cells: Vec<u32>,
    /// Number of addressable data cells
    cell_count: usize,
    /// Placement of the data region
    layout: MemoryLayout,
    /// Opts out of `Sync`
    _not_sync: PhantomData<Cell<()>>,
}

impl SimpleMemory {
    /// Allocate zeroed memory with `cell_count` data cells and the default layout
    pub fn new(cell_count: usize) -> Self {
        Self::with_layout(cell_count, MemoryLayout::default())
    }

    /// Allocate zeroed memory with `cell_count` data cells
    pub fn with_layout(cell_count: usize, layout: MemoryLayout) -> Self {
        debug!(
            "Allocating memory: {} data cells, {} prefix cells, {} bytes",
            cell_count,
            layout.prefix_cell_count,
            layout.total_bytes(cell_count)
        );
        Self {
            cells: vec![0; layout.total_cells(cell_count)],
            cell_count,
            layout,
            _not_sync: PhantomData,
        }
    }

    /// Adopt a raw buffer received from a transport.
    ///
    /// `bytes` must contain the prefix region followed by the data region.
    /// The number of data cells is derived from the length.
    pub fn from_bytes(bytes: &[u8], layout: MemoryLayout) -> Result<Self> {
        let cell_count = layout.cell_count_for(bytes.len())?;
        let mut memory = Self::with_layout(cell_count, layout);
        memory.as_bytes_mut().copy_from_slice(bytes);
        debug!("Adopted {} byte buffer as {} data cells", bytes.len(), cell_count);
        Ok(memory)
    }

    /// Number of addressable data cells
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Number of cells reserved in front of the data region
    pub const fn prefix_cell_count(&self) -> usize {
        self.layout.prefix_cell_count
    }

    /// Layout of this memory
    pub const fn layout(&self) -> MemoryLayout {
        self.layout
    }

    /// Size of the whole buffer in bytes, prefix included
    pub const fn total_bytes(&self) -> usize {
        self.cells.len() * CELL_SIZE_BYTES
    }

    /// The whole buffer, prefix included, as sent to hardware
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// The data region only
    pub fn data_bytes(&self) -> &[u8] {
        &self.as_bytes()[self.layout.prefix_bytes()..]
    }

    /// Consume the memory and return the whole buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Write the transport header into the prefix region
    pub fn write_header(&mut self, header: &MemoryHeader) -> Result<()> {
        let range = self.header_range()?;
        let bytes = header.build()?;
        self.as_bytes_mut()[range].copy_from_slice(&bytes);
        debug!(
            "Wrote header: member {} with {} cells",
            header.member_id, header.cell_count
        );
        Ok(())
    }

    /// Write a header routing this memory to `member_id`.
    ///
    /// The payload length is taken from this memory's cell count.
    pub fn write_member_id(&mut self, member_id: u32) -> Result<()> {
        let header = MemoryHeader::for_cells(member_id, self.cell_count)?;
        self.write_header(&header)
    }

    /// Read the transport header from the prefix region
    pub fn read_header(&self) -> Result<MemoryHeader> {
        let range = self.header_range()?;
        MemoryHeader::parse(&self.as_bytes()[range])
    }

    fn header_range(&self) -> Result<Range<usize>> {
        if self.layout.prefix_cell_count < HEADER_CELL_COUNT {
            return Err(MemoryError::HeaderUnavailable {
                prefix_cell_count: self.layout.prefix_cell_count,
            });
        }
        Ok(0..HEADER_CELL_COUNT * CELL_SIZE_BYTES)
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.cells)
    }

    /// Physical cell range of a logical span, bounds-checked
    fn cell_range(&self, index: usize, span: usize) -> Result<Range<usize>> {
        self.layout.cell_range(self.cell_count, index, span)
    }

    /// Physical byte range of a logical span, bounds-checked
    fn byte_range(&self, index: usize, span: usize) -> Result<Range<usize>> {
        self.layout.byte_range(self.cell_count, index, span)
    }

    fn cell(&self, index: usize) -> Result<[u8; 4]> {
        let range = self.byte_range(index, 1)?;
        let mut cell = [0u8; 4];
        cell.copy_from_slice(&self.as_bytes()[range]);
        Ok(cell)
    }

    fn set_cell(&mut self, index: usize, cell: [u8; 4]) -> Result<()> {
        let range = self.byte_range(index, 1)?;
        self.as_bytes_mut()[range].copy_from_slice(&cell);
        Ok(())
    }
}
