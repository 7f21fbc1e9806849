//! A contiguous growable vector layered on an owning raw buffer.
//!
//! Provides a value-semantic sequence container with amortised O(1)
//! append, random access, positional insert and erase, and explicit
//! capacity control. Raw storage is kept separate from the count of
//! constructed elements, so capacity can be reserved without running any
//! element constructors.
//!
//! # Architecture
//!
//! ```text
//! Vector<T> (size tracking, growth, element lifecycle)
//! └── RawBuffer<T> (owns `capacity` uninitialised slots, never drops T)
//! ```
//!
//! # Growth
//!
//! - **push_back / insert:** double the capacity, starting at 1.
//! - **resize past capacity:** allocate twice the requested length.
//! - **reserve:** exactly the requested capacity.
//!
//! Capacity never decreases. Failed allocations return
//! [`VectorError`] and leave the vector unchanged.
//!
//! # Example
//!
//! ```
//! use simple_vector::Vector;
//!
//! let mut v = Vector::new();
//! v.push_back(1)?;
//! v.push_back(3)?;
//! v.insert(1, 2)?;
//! assert_eq!(v, [1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//! assert!(v.at(3).is_err());
//! # Ok::<(), simple_vector::VectorError>(())
//! ```
//!
//! # Unsafe code
//!
//! Confined to `raw`, `vector` and `iter`. Every `unsafe` block states the
//! invariant it relies on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod cmp;
pub mod error;
pub mod growth;
pub mod iter;
pub mod raw;
pub mod vector;

// Public re-exports for the primary API surface.
pub use error::VectorError;
pub use growth::GrowthPolicy;
pub use iter::IntoIter;
pub use raw::RawBuffer;
pub use vector::Vector;
