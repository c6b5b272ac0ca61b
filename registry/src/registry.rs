//! The pending-verification map with issue/consume operations.

use crate::{RegistryError, VerificationToken};
use reclaim_types::{ItemId, ItemKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// What an issued token points at: the registration awaiting verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    pub item_id: ItemId,
    pub kind: ItemKind,
}

/// Registry of pending verification tokens.
///
/// Single-use semantics come from removal-on-lookup: [`consume`] removes the
/// entry while returning it, so there is no separate "mark used" state to
/// keep consistent. The map lives behind a `Mutex`, which serializes
/// concurrent `issue`/`consume` calls, so two racing `consume` calls on the
/// same token can never both observe it present.
///
/// [`consume`]: VerificationRegistry::consume
pub struct VerificationRegistry {
    pending: Mutex<HashMap<String, PendingVerification>>,
}

impl VerificationRegistry {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Issue a fresh token for a registration and remember what it points at.
    ///
    /// Tokens are drawn from OS entropy; on the (negligible) chance of
    /// colliding with a currently-pending token, a new one is drawn, so the
    /// returned token is always unique among pending ones.
    pub fn issue(
        &self,
        item_id: ItemId,
        kind: ItemKind,
    ) -> Result<VerificationToken, RegistryError> {
        let mut pending = self.pending.lock().unwrap();
        let token = loop {
            let candidate = VerificationToken::generate()?;
            if !pending.contains_key(candidate.as_str()) {
                break candidate;
            }
        };
        pending.insert(
            token.as_str().to_string(),
            PendingVerification { item_id, kind },
        );
        Ok(token)
    }

    /// Atomically remove and return the record for `token`.
    ///
    /// Returns `None` for unknown or already-consumed tokens. An unknown
    /// token is not an internal error: the HTTP boundary maps it to an
    /// invalid-token response.
    pub fn consume(&self, token: &str) -> Option<PendingVerification> {
        self.pending.lock().unwrap().remove(token)
    }

    /// Number of tokens currently awaiting consumption.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

impl Default for VerificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
