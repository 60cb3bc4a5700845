//! # crypto-optimizer
//!
//! Simulated crypto portfolio with LLM-backed transaction recommendations.
//!
//! ## Flow
//!
//! ```text
//! ┌───────────┐   ┌───────────┐   ┌─────────────┐   ┌──────────────────┐
//! │ bootstrap │──▶│ generator │──▶│ transaction │──▶│    optimizer     │
//! │ (API key) │   │ (random   │   │ (20%..40%   │   │ (AssistantAgent  │
//! │           │   │ holdings) │   │  of value)  │   │  → free text)    │
//! └───────────┘   └───────────┘   └─────────────┘   └──────────────────┘
//!                        │                │                   │
//!                        └────────────────┴─────── report ────┘
//! ```
//!
//! The "optimizer" has no objective function of its own: the decision is
//! delegated entirely to the language model and its answer is shown verbatim.

pub mod bootstrap;
pub mod error;
pub mod generator;
pub mod market;
pub mod model;
pub mod optimizer;
pub mod report;
pub mod transaction;

pub use error::{AdvisorError, Result};
pub use generator::{GeneratorConfig, PortfolioGenerator};
pub use model::{Asset, Holding, Portfolio, PortfolioValuation, Recommendation};
pub use optimizer::TransactionOptimizer;
pub use transaction::{Purpose, TransactionRequest};

/// System prompt for the transaction advisor assistant
pub const TRANSACTION_ADVISOR_PROMPT: &str = r"You are a cryptocurrency portfolio assistant helping a user fund a payment from their holdings.

When asked how to cover a payment:

1. Suggest which assets to sell and the quantity of each, so the proceeds cover the amount
2. Prefer keeping the portfolio diversified; avoid liquidating a single asset entirely unless necessary
3. Mention any trade-offs (volatility, concentration, recent price moves)
4. Keep the answer short: a list of sells followed by one or two sentences of rationale

This is a simulation. Do not ask follow-up questions.";
