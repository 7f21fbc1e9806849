//! Vector-specific error types.

use std::alloc::{handle_alloc_error, Layout};
use std::error::Error;
use std::fmt;

/// Errors that can occur during vector operations.
///
/// Every variant leaves the container exactly as it was before the
/// failing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// Checked access at an index past the live prefix.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        size: usize,
    },
    /// The global allocator returned null for the requested layout.
    AllocationError {
        /// Layout that could not be satisfied.
        layout: Layout,
    },
    /// The requested slot count cannot be represented as an allocation
    /// (byte size exceeds `isize::MAX` or growth arithmetic overflowed).
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
}

impl VectorError {
    /// Turn an allocation failure into the process-level response `std`
    /// uses for infallible collection APIs.
    ///
    /// Allocator failures go to [`handle_alloc_error`]; overflow panics.
    /// Used by trait impls (`Clone`, `Extend`, `FromIterator`) whose
    /// signatures cannot carry a `Result`.
    pub(crate) fn abort(self) -> ! {
        match self {
            Self::AllocationError { layout } => handle_alloc_error(layout),
            other => panic!("{other}"),
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for vector of size {size}")
            }
            Self::AllocationError { layout } => {
                write!(
                    f,
                    "allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
        }
    }
}

impl Error for VectorError {}
