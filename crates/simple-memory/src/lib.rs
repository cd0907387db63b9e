//! Cell-addressed memory shared between software and hardware implementations.
//!
//! A [`SimpleMemory`] is a flat buffer of 4-byte cells. Software writes its
//! inputs into cells, the same buffer is handed to a hardware implementation
//! of the computation, and the outputs are read back from cells. Both sides
//! must agree on the layout bit for bit, so the layout is fixed:
//!
//! - **Cell**: 4 bytes, addressed by index, never by byte offset
//! - **Prefix region**: 3 cells in front of the data region holding the
//!   transport header (member id and payload length)
//! - **Byte order**: little-endian
//! - **Booleans**: `0xFFFF_FFFF` for `true`, `0x0000_0000` for `false`
//!
//! See [`layout`] and [`codec`] for the exact definitions.
//!
//! # Components
//!
//! - [`layout`]: constants and index translation
//! - [`codec`]: cell encodings, including the boolean mapping
//! - [`header`]: transport header in the prefix region
//! - [`access`]: read/write classification of every accessor
//!
//! # Examples
//!
//! ```
//! use simple_memory::SimpleMemory;
//!
//! let mut memory = SimpleMemory::new(26);
//! let inputs: Vec<i32> = (0..13).map(|i| i * 1000 - 6000).collect();
//! memory.write_int32_batch(0, &inputs)?;
//!
//! // ... run the computation against `memory.as_bytes()` ...
//!
//! assert_eq!(memory.read_int32_copy(0, 13)?, inputs);
//! assert!(memory.read_int32(26).is_err());
//! # Ok::<(), simple_memory::MemoryError>(())
//! ```

#![warn(missing_docs)]

pub mod access;
pub mod codec;
pub mod error;
pub mod header;
pub mod layout;
mod memory;

pub use access::{ACCESSORS, AccessDirection, Accessor, CellSpan, NON_CELL_METHODS};
pub use codec::{CellValue, FALSE_PATTERN, TRUE_PATTERN, decode_boolean, encode_boolean};
pub use error::{MemoryError, Result, ensure_batch_len};
pub use header::MemoryHeader;
pub use layout::{BYTE_ORDER, CELL_SIZE_BYTES, DEFAULT_PREFIX_CELL_COUNT, MemoryLayout};
pub use memory::SimpleMemory;
