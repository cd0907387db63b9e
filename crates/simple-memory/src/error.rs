//! Error types for memory access

use thiserror::Error;

/// Errors that can occur while accessing a [`SimpleMemory`](crate::SimpleMemory)
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Cell index or span falls outside the data region
    #[error("cell range out of bounds: index {index} + span {span} exceeds {cell_count} cells")]
    OutOfBounds {
        /// First cell index requested
        index: usize,
        /// Number of cells requested
        span: usize,
        /// Number of addressable data cells
        cell_count: usize,
    },

    /// Raw write larger than a single cell
    #[error("raw cell write of {len} bytes exceeds the 4-byte cell size")]
    OversizedCell {
        /// Length of the rejected input
        len: usize,
    },

    /// The backing buffer cannot be exposed as the requested view
    #[error("view not supported: {reason}")]
    ViewNotSupported {
        /// Why the view could not be created
        reason: &'static str,
    },

    /// Batch or header length disagrees with what the caller expects
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected number of elements
        expected: usize,
        /// Actual number of elements
        actual: usize,
    },

    /// Raw buffer length is not a whole number of cells or misses the prefix
    #[error("invalid buffer length {len}: must be a multiple of 4 and at least {prefix_bytes} bytes")]
    InvalidBufferLength {
        /// Length of the supplied buffer in bytes
        len: usize,
        /// Size of the prefix region in bytes
        prefix_bytes: usize,
    },

    /// Prefix region too small to hold a header
    #[error("prefix of {prefix_cell_count} cells cannot hold a memory header")]
    HeaderUnavailable {
        /// Configured prefix size in cells
        prefix_cell_count: usize,
    },

    /// Data cell count too large for the 32-bit header length field
    #[error("{cell_count} data cells cannot be described by a 32-bit header length")]
    HeaderOverflow {
        /// Number of data cells in the memory
        cell_count: usize,
    },

    /// Header encoding or decoding failed
    #[error("header codec error: {0}")]
    Header(#[from] binrw::Error),
}

/// Result type for memory operations
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Check that a caller-supplied batch has the length a computation expects.
///
/// Call this before writing any cell so a mismatch never leaves the memory
/// partially updated.
pub fn ensure_batch_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(MemoryError::LengthMismatch { expected, actual })
    }
}
