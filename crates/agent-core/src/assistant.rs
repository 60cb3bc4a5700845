//! Assistant Agent
//!
//! A named participant that wraps a single chat-completion provider. The
//! assistant owns its system prompt and generation settings and turns a
//! question into one provider call.

use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::message::{Conversation, Message};
use crate::provider::{Completion, GenerationOptions, LlmProvider};

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Participant name, attached to every assistant reply
    pub name: String,

    /// System prompt
    pub system_prompt: String,

    /// Generation options
    pub generation: GenerationOptions,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            generation: GenerationOptions::default(),
        }
    }
}

pub const DEFAULT_AGENT_NAME: &str = "Assistant";

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Be concise and accurate.";

/// A named assistant bound to one provider
pub struct AssistantAgent {
    provider: Arc<dyn LlmProvider>,
    config: AgentConfig,
}

impl AssistantAgent {
    /// Create a new agent
    pub fn new(provider: Arc<dyn LlmProvider>, config: AgentConfig) -> Self {
        Self { provider, config }
    }

    /// Create with default configuration
    pub fn with_defaults(provider: Arc<dyn LlmProvider>) -> Self {
        Self::new(provider, AgentConfig::default())
    }

    /// Run the agent on an existing conversation.
    ///
    /// The system prompt is inserted if missing, the reply is appended to the
    /// conversation and returned.
    ///
    /// # Errors
    ///
    /// Propagates provider failures. An empty reply is reported as
    /// [`AgentError::Provider`].
    pub async fn run(&self, conversation: &mut Conversation) -> Result<Completion> {
        if !conversation.has_system_prompt() {
            conversation.prepend_system(self.config.system_prompt.clone());
        }

        tracing::debug!(
            agent = %self.config.name,
            provider = self.provider.name(),
            model = %self.config.generation.model,
            messages = conversation.len(),
            "Requesting completion"
        );

        let completion = self.provider
            .complete(conversation.messages(), &self.config.generation)
            .await?;

        if completion.content.trim().is_empty() {
            return Err(AgentError::Provider("model returned an empty response".into()));
        }
        if completion.truncated() {
            tracing::warn!(agent = %self.config.name, "Completion truncated at max_tokens");
        }

        conversation.push(
            Message::assistant(&completion.content).with_name(&self.config.name),
        );

        Ok(completion)
    }

    /// Ask a single question in a fresh conversation
    ///
    /// # Errors
    ///
    /// See [`AssistantAgent::run`].
    pub async fn ask(&self, question: &str) -> Result<Completion> {
        let mut conversation = Conversation::with_system_prompt(&self.config.system_prompt);
        conversation.push(Message::user(question));
        self.run(&mut conversation).await
    }

    /// Participant name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Model identifier used for every request
    pub fn model(&self) -> &str {
        &self.config.generation.model
    }

    /// Underlying provider
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }
}

/// Builder for [`AssistantAgent`]
pub struct AgentBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    config: AgentConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            config: AgentConfig::default(),
        }
    }

    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    #[must_use]
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.generation.model = model.into();
        self
    }

    /// # Errors
    ///
    /// Returns [`AgentError::Config`] when no provider was set.
    pub fn build(self) -> Result<AssistantAgent> {
        let provider = self.provider
            .ok_or_else(|| AgentError::Config("Provider is required".into()))?;

        Ok(AssistantAgent::new(provider, self.config))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::message::Role;
    use crate::provider::FinishReason;

    struct EchoProvider {
        reply: String,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    impl EchoProvider {
        fn new(reply: &str) -> Self {
            Self { reply: reply.into(), seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "Echo"
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            messages: &[Message],
            options: &GenerationOptions,
        ) -> Result<Completion> {
            self.seen.lock().unwrap().push(messages.to_vec());
            Ok(Completion {
                content: self.reply.clone(),
                model: options.model.clone(),
                usage: None,
                finish_reason: Some(FinishReason::Stop),
            })
        }
    }

    #[test]
    fn test_builder_requires_provider() {
        let result = AgentBuilder::new().name("Assistant").build();
        assert!(matches!(result, Err(AgentError::Config(_))));
    }

    #[tokio::test]
    async fn test_ask_sends_system_and_user() {
        let provider = Arc::new(EchoProvider::new("Use ETH."));
        let agent = AgentBuilder::new()
            .provider(provider.clone())
            .name("Assistant")
            .system_prompt("Advise on payments.")
            .model("gpt-4o-mini")
            .build()
            .unwrap();

        let completion = agent.ask("Which asset should I spend?").await.unwrap();
        assert_eq!(completion.content, "Use ETH.");
        assert_eq!(completion.model, "gpt-4o-mini");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0][0].role, Role::System);
        assert_eq!(seen[0][0].content, "Advise on payments.");
        assert_eq!(seen[0][1].role, Role::User);
    }

    #[tokio::test]
    async fn test_run_appends_named_reply() {
        let agent = AssistantAgent::with_defaults(Arc::new(EchoProvider::new("ok")));
        let mut conversation = Conversation::new();
        conversation.push(Message::user("ping"));

        agent.run(&mut conversation).await.unwrap();

        assert_eq!(conversation.len(), 3);
        let reply = conversation.last().unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.name.as_deref(), Some("Assistant"));
    }

    #[tokio::test]
    async fn test_empty_reply_is_error() {
        let agent = AssistantAgent::with_defaults(Arc::new(EchoProvider::new("  \n")));
        let result = agent.ask("anything").await;
        assert!(matches!(result, Err(AgentError::Provider(_))));
    }
}
