//! Nullable notifier: records sends instead of delivering them.

use async_trait::async_trait;
use reclaim_notify::{Notifier, NotifyError};
use std::sync::Mutex;

/// A send captured by [`NullNotifier`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub verify_link: String,
}

/// A notifier that records every send for assertions.
///
/// Can be configured to fail, for exercising the delivery-failure path.
pub struct NullNotifier {
    sent: Mutex<Vec<SentEmail>>,
    failure: Mutex<Option<String>>,
}

impl NullNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Create a notifier whose every send fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        let notifier = Self::new();
        *notifier.failure.lock().unwrap() = Some(message.into());
        notifier
    }

    /// Everything sent so far, in order.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NullNotifier {
    async fn send_verification_email(
        &self,
        to: &str,
        verify_link: &str,
    ) -> Result<(), NotifyError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(NotifyError::RequestFailed(message));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            verify_link: verify_link.to_string(),
        });
        Ok(())
    }
}
