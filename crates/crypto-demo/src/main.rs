//! Crypto Portfolio Optimizer Demo
//!
//! Generates a random crypto portfolio, samples a payment against it and asks
//! an OpenAI assistant how to fund it. One linear pass, no retries.

mod settings;

use std::io::{self, Write};

use agent_runtime::OpenAiProvider;
use crypto_optimizer::{
    bootstrap::{self, API_KEY_VAR, BootstrapError},
    generator::demo_rng,
    market::{QuoteSource, StaticQuotes},
    report, transaction, AdvisorError, GeneratorConfig, PortfolioGenerator, TransactionOptimizer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::DemoSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = DemoSettings::from_env();
    let mut out = io::stdout().lock();

    report::write_intro(&mut out)?;

    let assistant = match bootstrap::connect(std::env::var(API_KEY_VAR).ok(), &settings.model, |key| {
        OpenAiProvider::new(settings.openai_config(key))
    }) {
        Ok(assistant) => assistant,
        Err(BootstrapError::Credential(_)) => {
            for line in bootstrap::credential_warning() {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    writeln!(out, "✅ OpenAI API client configured successfully!")?;
    writeln!(out)?;

    let market = StaticQuotes::new().snapshot().await?;

    let mut rng = demo_rng(settings.seed);
    if let Some(seed) = settings.seed {
        tracing::info!(seed, "Using fixed RNG seed");
    }

    writeln!(out, "🎲 Generating random portfolio...")?;
    writeln!(out)?;
    let portfolio = PortfolioGenerator::new(GeneratorConfig::default())?.generate(&mut rng, &market)?;
    report::write_portfolio(&mut out, &portfolio)?;

    let request = transaction::sample_request(&mut rng, portfolio.total_value());
    report::write_transaction(&mut out, &request)?;

    writeln!(out)?;
    writeln!(out, "🤖 Analyzing portfolio and generating recommendation...")?;
    writeln!(out)?;
    out.flush()?;

    let optimizer = TransactionOptimizer::new(assistant);
    let recommendation = match optimizer.recommend(&portfolio, &request).await {
        Ok(recommendation) => recommendation,
        Err(AdvisorError::Agent(e)) => {
            writeln!(out, "❌ {}", e.user_message())?;
            out.flush()?;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    if let Some(usage) = &recommendation.usage {
        tracing::info!(
            model = %recommendation.model,
            total_tokens = usage.total_tokens,
            "Recommendation received"
        );
    }

    report::write_recommendation(&mut out, &recommendation)?;
    report::write_completion(&mut out)?;
    out.flush()?;

    Ok(())
}
