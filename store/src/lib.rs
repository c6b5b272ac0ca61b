//! Abstract item storage for the reclaim registry.
//!
//! Every storage backend (LMDB, in-memory for testing) implements the
//! [`ItemStore`] trait. The rest of the workspace depends only on the trait.

pub mod error;
pub mod items;

pub use error::StoreError;
pub use items::ItemStore;
