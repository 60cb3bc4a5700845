//! Error Types for Crypto Optimizer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Asset not supported: {0}")]
    UnsupportedAsset(String),

    #[error("Market snapshot is empty; cannot build a portfolio")]
    EmptyMarket,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Agent(#[from] agent_core::AgentError),
}
