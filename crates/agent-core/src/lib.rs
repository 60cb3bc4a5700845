//! # agent-core
//!
//! Core agent logic with a provider-agnostic chat-completion abstraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 AssistantAgent                    │
//! │  ┌──────────────┐         ┌───────────────────┐  │
//! │  │ Conversation │────────▶│   LlmProvider     │  │
//! │  │  (messages)  │         │   (Strategy)      │  │
//! │  └──────────────┘         └───────────────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait lets the assistant talk to OpenAI or any other
//! chat-completion backend without changing agent logic.

pub mod assistant;
pub mod credentials;
pub mod error;
pub mod message;
pub mod provider;

pub use assistant::{AgentBuilder, AgentConfig, AssistantAgent};
pub use credentials::{ApiKey, CredentialError, PLACEHOLDER_API_KEY};
pub use error::{AgentError, Result};
pub use message::{Conversation, Message, Role};
pub use provider::{Completion, DEFAULT_MODEL, GenerationOptions, LlmProvider, TokenUsage};
