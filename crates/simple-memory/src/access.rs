//! Read/write classification of the public accessors.
//!
//! External analysis tools decide whether a call reads or writes memory by
//! looking at the accessor name: names start with `read` or `write`
//! (`read_int32`, `ReadInt32`, ...). [`ACCESSORS`] lists every accessor of
//! [`SimpleMemory`](crate::SimpleMemory) together with its direction so the
//! rule can be checked and exported instead of trusted.
//!
//! Methods that do not address cells are listed in [`NON_CELL_METHODS`]
//! instead. These are construction, metadata, and the raw transport views
//! (`as_bytes`, `data_bytes`, `into_bytes`) that hand the whole buffer,
//! prefix included, to the transport without interpreting any cell.

use serde::Serialize;

use self::AccessDirection::{Read, Write};
use self::CellSpan::{Prefix, Run, Single};

/// Direction of a memory access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessDirection {
    /// Reads cells
    Read,
    /// Writes cells
    Write,
}

impl AccessDirection {
    /// Classify an accessor by name.
    ///
    /// Accepts both `snake_case` and `PascalCase` names. Returns `None` for
    /// names that start with neither `read` nor `write`.
    pub fn classify(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("read") {
            Some(Self::Read)
        } else if lower.starts_with("write") {
            Some(Self::Write)
        } else {
            None
        }
    }
}

/// How many cells an accessor touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellSpan {
    /// One data cell
    Single,
    /// A contiguous run of data cells
    Run,
    /// The prefix region
    Prefix,
}

/// One public accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accessor {
    /// Method name
    pub name: &'static str,
    /// Access direction
    pub direction: AccessDirection,
    /// Cells touched
    pub span: CellSpan,
}

const fn accessor(name: &'static str, direction: AccessDirection, span: CellSpan) -> Accessor {
    Accessor {
        name,
        direction,
        span,
    }
}

/// Every public accessor of [`SimpleMemory`](crate::SimpleMemory).
pub const ACCESSORS: &[Accessor] = &[
    accessor("write_int32", Write, Single),
    accessor("read_int32", Read, Single),
    accessor("write_uint32", Write, Single),
    accessor("read_uint32", Read, Single),
    accessor("write_boolean", Write, Single),
    accessor("read_boolean", Read, Single),
    accessor("write_4bytes", Write, Single),
    accessor("read_4bytes", Read, Single),
    accessor("write_int32_batch", Write, Run),
    accessor("write_uint32_batch", Write, Run),
    accessor("write_boolean_batch", Write, Run),
    accessor("write_4bytes_batch", Write, Run),
    accessor("read_int32_view", Read, Run),
    accessor("read_uint32_view", Read, Run),
    accessor("read_4bytes_view", Read, Run),
    accessor("read_int32_copy", Read, Run),
    accessor("read_uint32_copy", Read, Run),
    accessor("read_boolean_copy", Read, Run),
    accessor("read_4bytes_copy", Read, Run),
    accessor("write_header", Write, Prefix),
    accessor("write_member_id", Write, Prefix),
    accessor("read_header", Read, Prefix),
];

/// Public methods of [`SimpleMemory`](crate::SimpleMemory) that are not cell
/// accessors.
pub const NON_CELL_METHODS: &[&str] = &[
    "new",
    "with_layout",
    "from_bytes",
    "cell_count",
    "prefix_cell_count",
    "layout",
    "total_bytes",
    "as_bytes",
    "data_bytes",
    "into_bytes",
];

/// Look up an accessor by name
pub fn find_accessor(name: &str) -> Option<&'static Accessor> {
    ACCESSORS.iter().find(|a| a.name == name)
}
