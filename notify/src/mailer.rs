//! The notifier seam and its HTTP mail API implementation.

use crate::NotifyError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout for mail API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const SUBJECT: &str = "Verify your item registration";

/// Seam for sending verification emails.
///
/// Callers treat delivery as best-effort: a failed send is logged by the
/// HTTP boundary, and the registration stands either way.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Mail a verification link to the registrant.
    async fn send_verification_email(
        &self,
        to: &str,
        verify_link: &str,
    ) -> Result<(), NotifyError>;
}

/// Settings for the transactional-mail HTTP endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Full URL of the mail API's send endpoint.
    pub endpoint: String,
    /// API key sent in the `api-key` header.
    pub api_key: String,
    pub sender_email: String,
    pub sender_name: Option<String>,
}

impl MailerConfig {
    /// Whether enough settings are present to attempt delivery.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.sender_email.trim().is_empty()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    html_content: String,
}

/// Notifier backed by a transactional-mail HTTP API (Brevo-compatible
/// payload shape).
pub struct HttpMailer {
    config: MailerConfig,
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
}

impl HttpMailer {
    pub fn new(config: MailerConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            config,
            http_client,
        }
    }

    fn body_for(&self, to: &str, verify_link: &str) -> SendEmailBody {
        SendEmailBody {
            sender: EmailAddress {
                email: self.config.sender_email.clone(),
                name: self.config.sender_name.clone(),
            },
            to: vec![EmailAddress {
                email: to.to_string(),
                name: None,
            }],
            subject: SUBJECT.to_string(),
            html_content: format!(
                "<p>Please verify your item by clicking <a href=\"{verify_link}\">here</a>.</p>"
            ),
        }
    }
}

#[async_trait]
impl Notifier for HttpMailer {
    async fn send_verification_email(
        &self,
        to: &str,
        verify_link: &str,
    ) -> Result<(), NotifyError> {
        if !self.config.is_configured() {
            return Err(NotifyError::NotConfigured);
        }

        let body = self.body_for(to, verify_link);
        let response = self
            .http_client
            .post(&self.config.endpoint)
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Unreachable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    NotifyError::Unreachable(format!("connection failed: {e}"))
                } else {
                    NotifyError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Notifier used when no mail endpoint is configured.
///
/// Every send fails with [`NotifyError::NotConfigured`], which the HTTP
/// boundary logs like any other delivery failure.
pub struct DisabledMailer;

#[async_trait]
impl Notifier for DisabledMailer {
    async fn send_verification_email(&self, _to: &str, _link: &str) -> Result<(), NotifyError> {
        Err(NotifyError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailerConfig {
        MailerConfig {
            endpoint: "https://mail.invalid/v3/smtp/email".to_string(),
            api_key: "key".to_string(),
            sender_email: "registry@example.com".to_string(),
            sender_name: Some("Reclaim".to_string()),
        }
    }

    #[test]
    fn payload_contains_link_and_recipient() {
        let mailer = HttpMailer::new(config());
        let body = mailer.body_for("owner@example.com", "http://localhost:3000/api/verify/abc");
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("owner@example.com"));
        assert!(json.contains("http://localhost:3000/api/verify/abc"));
        assert!(json.contains("htmlContent"));
    }

    #[test]
    fn blank_api_key_is_unconfigured() {
        let mut cfg = config();
        cfg.api_key = "  ".to_string();
        assert!(!cfg.is_configured());
        assert!(config().is_configured());
    }

    #[tokio::test]
    async fn unconfigured_mailer_fails_without_network() {
        let mut cfg = config();
        cfg.api_key = String::new();
        let mailer = HttpMailer::new(cfg);
        let err = mailer
            .send_verification_email("owner@example.com", "http://x/api/verify/t")
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::NotConfigured));
    }

    #[tokio::test]
    async fn disabled_mailer_reports_not_configured() {
        let err = DisabledMailer
            .send_verification_email("owner@example.com", "http://x")
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::NotConfigured));
    }
}
