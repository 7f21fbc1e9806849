//! Instrumented element types for simple-vector development.
//!
//! Container tests care less about values than about what happens to
//! them: how often they are cloned and dropped, and what the container
//! looks like after a constructor panics. The fixtures in [`fixtures`]
//! record exactly that.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{Counted, DropLedger, PanicOnClone, PanicOnDefault, Tracked};
