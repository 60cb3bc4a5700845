//! # agent-runtime
//!
//! Runtime providers for agent-core.
//!
//! ## Providers
//!
//! - **OpenAI** (default): chat completions against `api.openai.com` or any
//!   OpenAI-compatible endpoint
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::openai::{OpenAiConfig, OpenAiProvider};
//!
//! let provider = OpenAiProvider::new(OpenAiConfig::new(api_key))?;
//! let agent = AgentBuilder::new()
//!     .provider(Arc::new(provider))
//!     .build()?;
//! ```

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAiConfig, OpenAiProvider};

// Re-export core types for convenience
pub use agent_core::{AgentError, ApiKey, AssistantAgent, LlmProvider, Message, Result, Role};
