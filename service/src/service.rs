//! Service construction and lifecycle.

use std::sync::Arc;

use tracing::{info, warn};

use reclaim_api::{ApiServer, AppState};
use reclaim_notify::{DisabledMailer, HttpMailer, Notifier};
use reclaim_registry::VerificationRegistry;
use reclaim_store::ItemStore;
use reclaim_store_lmdb::LmdbEnvironment;

use crate::{ServiceConfig, ServiceError, StoreBackend};

/// The assembled service: store, token registry, notifier and API server.
///
/// The verification registry is created here, at process start, and lives
/// exactly as long as the process: a restart drops all pending tokens.
pub struct ReclaimService {
    config: ServiceConfig,
    state: AppState,
}

impl ReclaimService {
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let store: Arc<dyn ItemStore> = match config.store_backend {
            StoreBackend::Lmdb => {
                let env = LmdbEnvironment::open(&config.data_dir, config.map_size)?;
                info!(data_dir = %config.data_dir.display(), "opened LMDB item store");
                Arc::new(env.item_store())
            }
            StoreBackend::Memory => {
                warn!("using in-memory item store; nothing survives a restart");
                Arc::new(reclaim_nullables::NullItemStore::new())
            }
        };

        let notifier: Arc<dyn Notifier> = match &config.mail {
            Some(mail) if mail.is_configured() => Arc::new(HttpMailer::new(mail.clone())),
            _ => {
                warn!("mail delivery not configured; verification links will not be sent");
                Arc::new(DisabledMailer)
            }
        };

        let state = AppState {
            store,
            registry: Arc::new(VerificationRegistry::new()),
            notifier,
            public_base_url: config.public_base_url.clone(),
        };

        Ok(Self { config, state })
    }

    /// Shared handles, for tests and embedders.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the API server until SIGINT/SIGTERM.
    pub async fn run(&self) -> Result<(), ServiceError> {
        let server = ApiServer::new(
            self.config.listen_addr.clone(),
            self.config.port,
            self.state.clone(),
        );
        server.start(shutdown_signal()).await?;
        info!("reclaim service stopped");
        Ok(())
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { info!("received SIGINT, shutting down"); }
        _ = terminate => { info!("received SIGTERM, shutting down"); }
    }
}
