//! Axum-based API server.

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use reclaim_notify::Notifier;
use reclaim_registry::VerificationRegistry;
use reclaim_store::ItemStore;

use crate::error::ApiError;
use crate::handlers;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub registry: Arc<VerificationRegistry>,
    pub notifier: Arc<dyn Notifier>,
    /// Base URL used to build verification links in emails.
    pub public_base_url: String,
}

/// Build the application router.
///
/// CORS is wide open, matching the browser-facing nature of the original
/// endpoints (no caller authentication; see non-goals).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/found", post(handlers::register_found))
        .route("/api/lost", post(handlers::register_lost))
        .route("/api/verify/:token", get(handlers::verify_token))
        .route("/api/search", post(handlers::search_items))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The API server, configured with a bind address and shared state.
pub struct ApiServer {
    pub listen_addr: String,
    pub port: u16,
    pub state: AppState,
}

impl ApiServer {
    pub fn new(listen_addr: impl Into<String>, port: u16, state: AppState) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            port,
            state,
        }
    }

    /// Serve until the `shutdown` future completes.
    pub async fn start(
        &self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ApiError> {
        let app = router(self.state.clone());
        let addr = format!("{}:{}", self.listen_addr, self.port);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ApiError::Server(format!("failed to bind {addr}: {e}")))?;
        info!("API server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ApiError::Server(e.to_string()))?;
        Ok(())
    }
}
