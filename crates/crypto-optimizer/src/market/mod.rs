//! Market Data
//!
//! Prices the generator draws from. A source lists the symbols it knows and
//! quotes them one at a time; a snapshot is every listed symbol that priced.

mod static_quotes;

pub use static_quotes::StaticQuotes;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Asset;

/// A source of USD quotes
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Label used in logs
    fn label(&self) -> &str;

    /// Symbols this source lists
    fn listed(&self) -> Vec<&'static str>;

    /// Quote a single symbol (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`crate::AdvisorError::UnsupportedAsset`] when the symbol is not listed.
    async fn quote(&self, symbol: &str) -> Result<Asset>;

    /// Quote every listed symbol.
    ///
    /// Symbols that fail to price are dropped. An empty snapshot is returned
    /// as-is and rejected later by the generator.
    ///
    /// # Errors
    ///
    /// Only for sources that can fail as a whole.
    async fn snapshot(&self) -> Result<Vec<Asset>> {
        let listed = self.listed();
        let mut assets = Vec::with_capacity(listed.len());

        for symbol in listed {
            match self.quote(symbol).await {
                Ok(asset) => assets.push(asset),
                Err(e) => {
                    tracing::debug!(source = self.label(), symbol, error = %e, "Dropping unpriced symbol");
                }
            }
        }

        tracing::debug!(source = self.label(), quotes = assets.len(), "Market snapshot taken");
        Ok(assets)
    }
}
