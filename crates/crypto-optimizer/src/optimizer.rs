//! Transaction Optimizer
//!
//! Asks the assistant which holdings to sell to fund a payment. There is no
//! local decision logic: the portfolio and the request are rendered into a
//! prompt and the model's free-text answer is returned as-is.

use std::fmt::Write as _;

use agent_core::AssistantAgent;

use crate::error::Result;
use crate::model::{Portfolio, Recommendation};
use crate::transaction::TransactionRequest;

/// Builds prompts and delegates the recommendation to an assistant
pub struct TransactionOptimizer {
    agent: AssistantAgent,
}

impl TransactionOptimizer {
    pub const fn new(agent: AssistantAgent) -> Self {
        Self { agent }
    }

    /// Render the user prompt for a request
    #[must_use]
    pub fn build_prompt(portfolio: &Portfolio, request: &TransactionRequest) -> String {
        let valuation = portfolio.valuation();
        let mut prompt = String::from("My current crypto portfolio:\n");

        for h in &valuation.holdings {
            let _ = writeln!(
                prompt,
                "- {}: {} units @ ${:.2} = ${:.2} ({:.2}% of portfolio)",
                h.symbol, h.quantity.normalize(), h.price_usd, h.value, h.allocation_percent
            );
        }
        let _ = writeln!(prompt, "Total value: ${:.2}", valuation.total_value);
        let _ = writeln!(prompt);
        let _ = writeln!(
            prompt,
            "I need to make a payment of ${:.2} (purpose: {}). Which assets should I sell, and how much of each, to cover it?",
            request.amount_cents(),
            request.purpose
        );

        prompt
    }

    /// Request a recommendation for paying `request` out of `portfolio`.
    ///
    /// # Errors
    ///
    /// Any provider failure is returned unchanged as [`crate::AdvisorError::Agent`].
    pub async fn recommend(
        &self,
        portfolio: &Portfolio,
        request: &TransactionRequest,
    ) -> Result<Recommendation> {
        let prompt = Self::build_prompt(portfolio, request);

        tracing::info!(
            agent = self.agent.name(),
            amount = %request.amount_cents(),
            purpose = %request.purpose,
            "Requesting transaction recommendation"
        );

        let completion = self.agent.ask(&prompt).await?;

        Ok(Recommendation {
            text: completion.content,
            model: completion.model,
            usage: completion.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use agent_core::{
        AgentBuilder, AgentError, Completion, GenerationOptions, LlmProvider, Message,
    };
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::AdvisorError;
    use crate::model::Holding;
    use crate::transaction::Purpose;

    struct ScriptedProvider {
        reply: agent_core::Result<String>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn health_check(&self) -> agent_core::Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            messages: &[Message],
            options: &GenerationOptions,
        ) -> agent_core::Result<Completion> {
            if let Some(last) = messages.last() {
                self.prompts.lock().unwrap().push(last.content.clone());
            }
            match &self.reply {
                Ok(text) => Ok(Completion {
                    content: text.clone(),
                    model: options.model.clone(),
                    usage: None,
                    finish_reason: None,
                }),
                Err(e) => Err(AgentError::Provider(e.to_string())),
            }
        }
    }

    fn portfolio() -> Portfolio {
        Portfolio::new("Example")
            .with_holding(Holding::new("BTC", dec!(0.1), dec!(60000)))
            .with_holding(Holding::new("ETH", dec!(2), dec!(3000)))
    }

    fn optimizer(provider: Arc<ScriptedProvider>) -> TransactionOptimizer {
        let agent = AgentBuilder::new().provider(provider).build().unwrap();
        TransactionOptimizer::new(agent)
    }

    #[test]
    fn test_prompt_contents() {
        let request = TransactionRequest::new(dec!(3000.125), Purpose::OnlinePurchase);
        let prompt = TransactionOptimizer::build_prompt(&portfolio(), &request);

        assert!(prompt.contains("- BTC: 0.1 units @ $60000.00 = $6000.00 (50.00% of portfolio)"));
        assert!(prompt.contains("- ETH: 2 units @ $3000.00"));
        assert!(prompt.contains("Total value: $12000.00"));
        assert!(prompt.contains("payment of $3000.12 (purpose: online purchase)"));
    }

    #[tokio::test]
    async fn test_recommend_returns_model_text() {
        let provider = Arc::new(ScriptedProvider {
            reply: Ok("Sell 1 ETH.".into()),
            prompts: Mutex::new(Vec::new()),
        });
        let optimizer = optimizer(provider.clone());

        let request = TransactionRequest::new(dec!(3000), Purpose::PaymentToFriend);
        let recommendation = optimizer.recommend(&portfolio(), &request).await.unwrap();

        assert_eq!(recommendation.text, "Sell 1 ETH.");
        assert_eq!(recommendation.model, "gpt-4o-mini");

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("payment to friend"));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = Arc::new(ScriptedProvider {
            reply: Err(AgentError::Provider("boom".into())),
            prompts: Mutex::new(Vec::new()),
        });
        let optimizer = optimizer(provider);

        let request = TransactionRequest::new(dec!(3000), Purpose::ServicePayment);
        let result = optimizer.recommend(&portfolio(), &request).await;
        assert!(matches!(result, Err(AdvisorError::Agent(AgentError::Provider(_)))));
    }
}
