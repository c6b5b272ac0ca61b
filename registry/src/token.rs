//! Verification token type and generation.

use crate::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of random bytes behind each token. 16 bytes (128 bits) puts
/// guessing a live token out of reach even for an attacker hammering the
/// verify endpoint.
pub const TOKEN_BYTES: usize = 16;

/// An opaque single-use verification token.
///
/// Rendered as lowercase hex, so it is URL-safe without escaping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Draw a fresh token from the OS entropy source.
    pub fn generate() -> Result<Self, RegistryError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        getrandom::getrandom(&mut bytes).map_err(|e| RegistryError::Entropy(e.to_string()))?;
        Ok(Self(hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_hex_of_expected_length() {
        let token = VerificationToken::generate().unwrap();
        assert_eq!(token.as_str().len(), TOKEN_BYTES * 2);
        assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token.as_str(), token.as_str().to_lowercase());
    }

    #[test]
    fn consecutive_tokens_differ() {
        let a = VerificationToken::generate().unwrap();
        let b = VerificationToken::generate().unwrap();
        assert_ne!(a, b);
    }
}
