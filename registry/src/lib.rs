//! Verification token registry.
//!
//! Registering an item issues a single-use token; clicking the mailed
//! verification link consumes it. The registry is purely in-memory and owned
//! by the process: a restart invalidates every pending verification, and the
//! affected registrations simply have to be re-submitted. Tokens are
//! short-lived secrets, not durable state.

pub mod error;
pub mod registry;
pub mod token;

pub use error::RegistryError;
pub use registry::{PendingVerification, VerificationRegistry};
pub use token::VerificationToken;
