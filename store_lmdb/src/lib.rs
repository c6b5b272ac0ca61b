//! LMDB storage backend for the reclaim registry.
//!
//! Implements the `ItemStore` trait from `reclaim-store` using the `heed`
//! LMDB bindings. Found and lost items map to separate LMDB databases within
//! a single environment; id counters live in a third `meta` database.

pub mod environment;
pub mod error;
pub mod items;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use items::LmdbItemStore;
