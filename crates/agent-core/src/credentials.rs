//! API Credentials
//!
//! Validates the provider API key read from the environment. A key that is
//! missing, blank, or still set to the `.env` template placeholder is refused
//! before any client is built.

use thiserror::Error;

/// Value shipped in the `.env` template; never a real key.
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

/// Why a credential was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("API key is not set")]
    Missing,

    #[error("API key is still the placeholder '{PLACEHOLDER_API_KEY}'")]
    Placeholder,
}

/// A validated API key.
///
/// `Debug` is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw environment value.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Missing`] for an absent or blank value and
    /// [`CredentialError::Placeholder`] for the template placeholder.
    pub fn parse(raw: Option<String>) -> Result<Self, CredentialError> {
        let raw = raw.ok_or(CredentialError::Missing)?;
        let key = raw.trim();

        if key.is_empty() {
            return Err(CredentialError::Missing);
        }
        if key == PLACEHOLDER_API_KEY {
            return Err(CredentialError::Placeholder);
        }

        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(****, len={})", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        assert_eq!(ApiKey::parse(None), Err(CredentialError::Missing));
        assert_eq!(ApiKey::parse(Some("   ".into())), Err(CredentialError::Missing));
    }

    #[test]
    fn test_placeholder_key() {
        assert_eq!(
            ApiKey::parse(Some(PLACEHOLDER_API_KEY.into())),
            Err(CredentialError::Placeholder)
        );
    }

    #[test]
    fn test_valid_key_is_trimmed_and_redacted() {
        let key = ApiKey::parse(Some(" sk-test-123 \n".into())).unwrap();
        assert_eq!(key.expose(), "sk-test-123");

        let debug = format!("{key:?}");
        assert!(!debug.contains("sk-test"));
        assert!(debug.contains("len=11"));
    }
}
