//! Shared utilities for the reclaim registry.

pub mod logging;

pub use logging::{init_logging, LogFormat};
