//! HTTP API for the reclaim registry.
//!
//! Routes:
//! - `POST /api/found`: register a found item, mail a verification link
//! - `POST /api/lost`: register a lost item, mail a verification link
//! - `GET /api/verify/:token`: consume a token, flip the verified flag
//! - `POST /api/search`: substring search over verified found items
//! - `GET /`: liveness message
//! - `GET /health`: item and pending-token counts

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{router, ApiServer, AppState};
