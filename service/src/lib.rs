//! Service assembly for the reclaim registry.
//!
//! Builds the store, token registry and notifier from configuration, wires
//! them into the HTTP API, and runs it with graceful shutdown.

pub mod config;
pub mod error;
pub mod service;

pub use config::{ServiceConfig, StoreBackend};
pub use error::ServiceError;
pub use service::ReclaimService;
