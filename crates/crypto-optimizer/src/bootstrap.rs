//! Credential and Client Bootstrap
//!
//! Validates the API key, then builds exactly one chat-completion client and
//! wraps it in the named assistant. The client factory runs only after the key
//! has been accepted.

use std::sync::Arc;

use agent_core::{AgentBuilder, AgentError, ApiKey, AssistantAgent, CredentialError, LlmProvider};
use thiserror::Error;

use crate::TRANSACTION_ADVISOR_PROMPT;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Name of the single assistant participant
pub const ASSISTANT_NAME: &str = "Assistant";

#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Missing or placeholder key; the caller should warn and exit(1)
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The client could not be constructed
    #[error("Failed to configure chat-completion client: {0}")]
    Client(#[source] AgentError),
}

/// Validate `raw_key` and build the assistant.
///
/// `make_client` is called at most once, and never when the key is refused.
///
/// # Errors
///
/// [`BootstrapError::Credential`] when the key is missing or the placeholder,
/// [`BootstrapError::Client`] when the factory fails.
pub fn connect<P, F>(
    raw_key: Option<String>,
    model: &str,
    make_client: F,
) -> Result<AssistantAgent, BootstrapError>
where
    P: LlmProvider + 'static,
    F: FnOnce(ApiKey) -> agent_core::Result<P>,
{
    let key = ApiKey::parse(raw_key).inspect_err(|e| {
        tracing::warn!(var = API_KEY_VAR, reason = %e, "Refusing to start without a usable API key");
    })?;

    let provider = make_client(key).map_err(BootstrapError::Client)?;
    let provider_name = provider.name().to_string();

    let agent = AgentBuilder::new()
        .provider(Arc::new(provider))
        .name(ASSISTANT_NAME)
        .system_prompt(TRANSACTION_ADVISOR_PROMPT)
        .model(model)
        .build()
        .map_err(BootstrapError::Client)?;

    tracing::info!(provider = %provider_name, model, agent = agent.name(), "Assistant configured");

    Ok(agent)
}

/// Lines shown to the user when the key is refused
#[must_use]
pub const fn credential_warning() -> [&'static str; 2] {
    [
        "⚠️  Warning: Please set your OpenAI API key in the .env file",
        "   Replace 'your_openai_api_key_here' with your actual API key",
    ]
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use agent_core::{Completion, GenerationOptions, Message, PLACEHOLDER_API_KEY};
    use async_trait::async_trait;

    use super::*;

    struct NullProvider;

    #[async_trait]
    impl LlmProvider for NullProvider {
        fn name(&self) -> &str {
            "Null"
        }

        async fn health_check(&self) -> agent_core::Result<bool> {
            Ok(false)
        }

        async fn complete(
            &self,
            _messages: &[Message],
            _options: &GenerationOptions,
        ) -> agent_core::Result<Completion> {
            Err(AgentError::ProviderUnavailable("null provider".into()))
        }
    }

    #[test]
    fn test_placeholder_never_builds_client() {
        let calls = Cell::new(0);
        let result = connect(Some(PLACEHOLDER_API_KEY.into()), "gpt-4o-mini", |_| {
            calls.set(calls.get() + 1);
            Ok(NullProvider)
        });

        assert!(matches!(
            result,
            Err(BootstrapError::Credential(CredentialError::Placeholder))
        ));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_missing_key_never_builds_client() {
        let calls = Cell::new(0);
        let result = connect(None, "gpt-4o-mini", |_| {
            calls.set(calls.get() + 1);
            Ok(NullProvider)
        });

        assert!(matches!(result, Err(BootstrapError::Credential(CredentialError::Missing))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_valid_key_builds_one_client_and_assistant() {
        let calls = Cell::new(0);
        let agent = connect(Some("sk-live-abc".into()), "gpt-4o-mini", |key| {
            calls.set(calls.get() + 1);
            assert_eq!(key.expose(), "sk-live-abc");
            Ok(NullProvider)
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(agent.name(), ASSISTANT_NAME);
        assert_eq!(agent.model(), "gpt-4o-mini");
        assert_eq!(agent.provider().name(), "Null");
    }

    #[test]
    fn test_client_failure_is_not_a_credential_error() {
        let result = connect(Some("sk-live-abc".into()), "gpt-4o-mini", |_| {
            Err::<NullProvider, _>(AgentError::Config("no TLS".into()))
        });
        assert!(matches!(result, Err(BootstrapError::Client(AgentError::Config(_)))));
    }

    #[test]
    fn test_warning_names_placeholder() {
        let [headline, hint] = credential_warning();
        assert!(headline.contains("OpenAI API key"));
        assert!(hint.contains(PLACEHOLDER_API_KEY));
    }
}
