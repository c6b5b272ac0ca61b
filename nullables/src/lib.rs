//! Nullable infrastructure: deterministic in-process stand-ins for the
//! external collaborators (storage, email), used by tests and the `memory`
//! store backend.

pub mod notifier;
pub mod store;

pub use notifier::{NullNotifier, SentEmail};
pub use store::NullItemStore;
