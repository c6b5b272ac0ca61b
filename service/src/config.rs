//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use reclaim_notify::MailerConfig;

use crate::ServiceError;

/// Which item store backend to run against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// LMDB on disk (production).
    Lmdb,
    /// In-memory, nothing survives a restart (development and tests).
    Memory,
}

/// Configuration for the reclaim service.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Data directory for LMDB storage.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Maximum LMDB map size in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,

    /// Item store backend.
    #[serde(default = "default_store_backend")]
    pub store_backend: StoreBackend,

    /// Base URL used when building verification links; must be the address
    /// at which registrants can actually reach this service.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Transactional-mail settings. Delivery is disabled when absent.
    /// Kept last so the TOML table serializes after the plain values.
    #[serde(default)]
    pub mail: Option<MailerConfig>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./reclaim_data")
}

fn default_map_size() -> usize {
    256 * 1024 * 1024
}

fn default_store_backend() -> StoreBackend {
    StoreBackend::Lmdb
}

fn default_public_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ServiceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServiceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServiceError> {
        toml::from_str(s).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ServiceConfig is always serializable to TOML")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            data_dir: default_data_dir(),
            map_size: default_map_size(),
            store_backend: default_store_backend(),
            public_base_url: default_public_base_url(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            mail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ServiceConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = ServiceConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.port, config.port);
        assert_eq!(parsed.store_backend, config.store_backend);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.port, 3000);
        assert_eq!(config.store_backend, StoreBackend::Lmdb);
        assert_eq!(config.log_format, "human");
        assert!(config.mail.is_none());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            port = 8080
            store_backend = "memory"
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.port, 8080);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn mail_section_is_parsed() {
        let toml = r#"
            [mail]
            endpoint = "https://api.brevo.com/v3/smtp/email"
            api_key = "secret"
            sender_email = "registry@example.com"
        "#;
        let config = ServiceConfig::from_toml_str(toml).expect("should parse");
        let mail = config.mail.expect("mail section present");
        assert!(mail.is_configured());
        assert_eq!(mail.sender_email, "registry@example.com");
        assert_eq!(mail.sender_name, None);
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = ServiceConfig::from_toml_file("/nonexistent/reclaim.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }
}
