//! Memory layout shared with the hardware memory controller.
//!
//! Everything the hardware side depends on lives here:
//!
//! - Cell size: 4 bytes ([`CELL_SIZE_BYTES`])
//! - Prefix region: 3 cells by default ([`DEFAULT_PREFIX_CELL_COUNT`])
//! - Byte order: little-endian ([`BYTE_ORDER`])
//!
//! Buffer layout (default prefix):
//!
//! ```text
//! byte 0x00  prefix cell 0   (header: member id)
//! byte 0x04  prefix cell 1   (header: data cell count)
//! byte 0x08  prefix cell 2   (header: reserved)
//! byte 0x0C  data cell 0
//! byte 0x10  data cell 1
//! ...
//! ```
//!
//! Changing any of these values breaks compatibility with hardware built
//! against the previous layout.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};

/// Size of one memory cell in bytes.
pub const CELL_SIZE_BYTES: usize = 4;

/// Number of prefix cells reserved for the transport header.
pub const DEFAULT_PREFIX_CELL_COUNT: usize = 3;

/// Byte order of every multi-byte value stored in the buffer.
pub const BYTE_ORDER: binrw::Endian = binrw::Endian::Little;

/// Placement of the data region inside the backing buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryLayout {
    /// Cells reserved in front of the data region
    pub prefix_cell_count: usize,
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self {
            prefix_cell_count: DEFAULT_PREFIX_CELL_COUNT,
        }
    }
}

impl MemoryLayout {
    /// Layout without a prefix region
    pub const fn unprefixed() -> Self {
        Self {
            prefix_cell_count: 0,
        }
    }

    /// Set the number of prefix cells
    #[must_use]
    pub const fn with_prefix_cell_count(mut self, prefix_cell_count: usize) -> Self {
        self.prefix_cell_count = prefix_cell_count;
        self
    }

    /// Size of the prefix region in bytes, saturating at `usize::MAX`
    pub const fn prefix_bytes(&self) -> usize {
        self.prefix_cell_count.saturating_mul(CELL_SIZE_BYTES)
    }

    /// Total cells (prefix + data) for a data region of `cell_count` cells,
    /// saturating at `usize::MAX`
    pub const fn total_cells(&self, cell_count: usize) -> usize {
        self.prefix_cell_count.saturating_add(cell_count)
    }

    /// Total allocation in bytes for a data region of `cell_count` cells,
    /// saturating at `usize::MAX`
    pub const fn total_bytes(&self, cell_count: usize) -> usize {
        self.total_cells(cell_count).saturating_mul(CELL_SIZE_BYTES)
    }

    /// Number of data cells in a raw buffer of `len` bytes.
    ///
    /// A prefix too large to address is reported like any other buffer that
    /// cannot hold it.
    pub fn cell_count_for(&self, len: usize) -> Result<usize> {
        let Some(prefix_bytes) = self.prefix_cell_count.checked_mul(CELL_SIZE_BYTES) else {
            return Err(MemoryError::InvalidBufferLength {
                len,
                prefix_bytes: usize::MAX,
            });
        };
        if len % CELL_SIZE_BYTES != 0 || len < prefix_bytes {
            return Err(MemoryError::InvalidBufferLength { len, prefix_bytes });
        }
        Ok((len - prefix_bytes) / CELL_SIZE_BYTES)
    }

    /// Translate a logical cell span to physical cell positions.
    ///
    /// Logical index 0 is the first data cell, which sits right after the
    /// prefix region. The span must lie entirely inside the data region.
    pub fn cell_range(&self, cell_count: usize, index: usize, span: usize) -> Result<Range<usize>> {
        let out_of_bounds = || MemoryError::OutOfBounds {
            index,
            span,
            cell_count,
        };

        let end = index.checked_add(span).ok_or_else(out_of_bounds)?;
        if end > cell_count {
            return Err(out_of_bounds());
        }

        let start = self
            .prefix_cell_count
            .checked_add(index)
            .ok_or_else(out_of_bounds)?;
        let end = start.checked_add(span).ok_or_else(out_of_bounds)?;
        if end.checked_mul(CELL_SIZE_BYTES).is_none() {
            return Err(out_of_bounds());
        }
        Ok(start..end)
    }

    /// Translate a logical cell span to a physical byte range.
    pub fn byte_range(&self, cell_count: usize, index: usize, span: usize) -> Result<Range<usize>> {
        let cells = self.cell_range(cell_count, index, span)?;
        Ok(cells.start * CELL_SIZE_BYTES..cells.end * CELL_SIZE_BYTES)
    }
}
