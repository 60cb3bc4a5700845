//! Domain Models
//!
//! Core data types for the simulated crypto portfolio.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::collections::BTreeMap;

use agent_core::TokenUsage;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cryptocurrency market quote
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker symbol (e.g., "BTC", "ETH")
    pub symbol: String,

    /// Full name (e.g., "Bitcoin", "Ethereum")
    pub name: String,

    /// Current price in USD
    pub price_usd: Decimal,

    /// 24-hour price change percentage
    pub change_24h: Decimal,

    /// Risk tier (1 = lowest, 5 = highest)
    pub risk_tier: u8,

    /// Last price update
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price_usd: Decimal) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            price_usd,
            change_24h: Decimal::ZERO,
            risk_tier: 3,
            updated_at: Utc::now(),
        }
    }
}

/// A quantity of one asset held at a unit price
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub price_usd: Decimal,
    pub change_24h: Decimal,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, quantity: Decimal, price_usd: Decimal) -> Self {
        let symbol = symbol.into().to_uppercase();
        Self {
            name: symbol.clone(),
            symbol,
            quantity,
            price_usd,
            change_24h: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn with_change_24h(mut self, change: Decimal) -> Self {
        self.change_24h = change;
        self
    }

    /// Market value (quantity * price)
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.quantity * self.price_usd
    }
}

/// A portfolio of holdings, keyed by symbol
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Portfolio {
    /// Portfolio name
    pub name: String,

    holdings: BTreeMap<String, Holding>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Portfolio {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holdings: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a holding, replacing any previous one for the same symbol
    #[must_use]
    pub fn with_holding(mut self, holding: Holding) -> Self {
        self.holdings.insert(holding.symbol.clone(), holding);
        self
    }

    /// Holdings in symbol order
    pub fn holdings(&self) -> impl Iterator<Item = &Holding> {
        self.holdings.values()
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(&symbol.to_uppercase())
    }

    /// Total portfolio value: sum of quantity * price over all holdings
    #[must_use]
    pub fn total_value(&self) -> Decimal {
        self.holdings.values().map(Holding::value).sum()
    }

    /// Allocation percentage per symbol
    #[must_use]
    pub fn allocations(&self) -> BTreeMap<String, Decimal> {
        let total = self.total_value();
        if total == Decimal::ZERO {
            return BTreeMap::new();
        }

        self.holdings
            .iter()
            .map(|(symbol, h)| (symbol.clone(), h.value() / total * Decimal::ONE_HUNDRED))
            .collect()
    }

    /// Full valuation snapshot
    #[must_use]
    pub fn valuation(&self) -> PortfolioValuation {
        let total_value = self.total_value();
        let holdings = self.holdings
            .values()
            .map(|h| {
                let value = h.value();
                let allocation_percent = if total_value > Decimal::ZERO {
                    (value / total_value * Decimal::ONE_HUNDRED).round_dp(2)
                } else {
                    Decimal::ZERO
                };
                HoldingValuation {
                    symbol: h.symbol.clone(),
                    quantity: h.quantity,
                    price_usd: h.price_usd,
                    value,
                    allocation_percent,
                }
            })
            .collect();

        PortfolioValuation { total_value, holdings }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// Point-in-time value of a portfolio
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioValuation {
    pub total_value: Decimal,
    pub holdings: Vec<HoldingValuation>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HoldingValuation {
    pub symbol: String,
    pub quantity: Decimal,
    pub price_usd: Decimal,
    pub value: Decimal,
    pub allocation_percent: Decimal,
}

/// Free-text advice returned by the assistant
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recommendation {
    /// Model output, unvalidated
    pub text: String,

    /// Model that produced the text
    pub model: String,

    pub usage: Option<TokenUsage>,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text.trim())
    }
}
