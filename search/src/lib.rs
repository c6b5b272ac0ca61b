//! Item matching for the reclaim registry.
//!
//! A pure, side-effect-free filter over a snapshot of item records. No state
//! machine, no I/O: callers fetch the verified records from the store and run
//! the matcher in-process.

pub mod matcher;

pub use matcher::{matches, search};
