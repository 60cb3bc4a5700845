//! Random Portfolio Generator
//!
//! Fabricates a portfolio from a market snapshot: a random subset of the
//! quoted assets, each priced near its quote and sized to a random dollar
//! target. All randomness comes from the caller's RNG so a seed reproduces
//! the whole run.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;

use crate::error::{AdvisorError, Result};
use crate::model::{Asset, Holding, Portfolio};

/// Smallest quantity a generated holding may have
const MIN_QUANTITY: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Bounds for generated portfolios
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Fewest distinct assets to hold
    pub min_assets: usize,

    /// Most distinct assets to hold (capped by the market size)
    pub max_assets: usize,

    /// Smallest target value per holding, whole USD
    pub min_position_usd: u64,

    /// Largest target value per holding, whole USD
    pub max_position_usd: u64,

    /// Max deviation applied to each quoted price, in percent
    pub price_jitter_percent: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_assets: 3,
            max_assets: 6,
            min_position_usd: 500,
            max_position_usd: 10_000,
            price_jitter_percent: 5,
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    ///
    /// Returns [`AdvisorError::Config`] for empty or inverted ranges.
    pub fn validate(&self) -> Result<()> {
        if self.min_assets == 0 {
            return Err(AdvisorError::Config("min_assets must be at least 1".into()));
        }
        if self.min_assets > self.max_assets {
            return Err(AdvisorError::Config(format!(
                "min_assets ({}) exceeds max_assets ({})",
                self.min_assets, self.max_assets
            )));
        }
        if self.min_position_usd == 0 || self.min_position_usd > self.max_position_usd {
            return Err(AdvisorError::Config(format!(
                "invalid position range ${}..=${}",
                self.min_position_usd, self.max_position_usd
            )));
        }
        if self.price_jitter_percent >= 100 {
            return Err(AdvisorError::Config("price_jitter_percent must be below 100".into()));
        }
        Ok(())
    }
}

/// RNG for a demo run: seeded when a seed is given, OS entropy otherwise
#[must_use]
pub fn demo_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Builds random portfolios from market quotes
#[derive(Clone, Debug)]
pub struct PortfolioGenerator {
    config: GeneratorConfig,
}

impl PortfolioGenerator {
    /// # Errors
    ///
    /// Rejects an invalid [`GeneratorConfig`].
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate a non-empty portfolio from the given market snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::EmptyMarket`] when `market` has no quotes.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, market: &[Asset]) -> Result<Portfolio> {
        if market.is_empty() {
            return Err(AdvisorError::EmptyMarket);
        }

        let upper = self.config.max_assets.min(market.len());
        let lower = self.config.min_assets.min(upper);
        let count = rng.random_range(lower..=upper);

        let mut portfolio = Portfolio::new("Random Crypto Portfolio");
        for asset in market.choose_multiple(rng, count) {
            let price = self.jittered_price(rng, asset.price_usd);
            let target = self.target_value(rng);
            let quantity = (target / price).round_dp(6).max(MIN_QUANTITY);

            portfolio = portfolio.with_holding(
                Holding::new(&asset.symbol, quantity, price)
                    .with_name(&asset.name)
                    .with_change_24h(asset.change_24h),
            );
        }

        tracing::debug!(
            holdings = portfolio.len(),
            total_value = %portfolio.total_value(),
            "Generated random portfolio"
        );

        Ok(portfolio)
    }

    /// Quote moved by up to ±`price_jitter_percent`, in basis-point steps
    fn jittered_price<R: Rng + ?Sized>(&self, rng: &mut R, quote: Decimal) -> Decimal {
        let span = i64::from(self.config.price_jitter_percent) * 100;
        let bps = if span == 0 { 0 } else { rng.random_range(-span..=span) };
        let factor = Decimal::ONE + Decimal::new(bps, 4);

        let dp = if quote < Decimal::ONE { 4 } else { 2 };
        let price = (quote * factor).round_dp(dp);
        if price > Decimal::ZERO { price } else { quote }
    }

    /// Random dollar target at cent resolution
    fn target_value<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let min_cents = self.config.min_position_usd.saturating_mul(100);
        let max_cents = self.config.max_position_usd.saturating_mul(100);
        let cents = rng.random_range(min_cents..=max_cents);
        Decimal::from(cents) / Decimal::ONE_HUNDRED
    }
}

impl Default for PortfolioGenerator {
    fn default() -> Self {
        Self { config: GeneratorConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal_macros::dec;

    use super::*;

    fn market() -> Vec<Asset> {
        vec![
            Asset::new("BTC", "Bitcoin", dec!(97500)),
            Asset::new("ETH", "Ethereum", dec!(3450)),
            Asset::new("SOL", "Solana", dec!(195)),
            Asset::new("ADA", "Cardano", dec!(0.95)),
            Asset::new("DOT", "Polkadot", dec!(7.20)),
            Asset::new("LINK", "Chainlink", dec!(24.50)),
            Asset::new("XRP", "Ripple", dec!(2.35)),
        ]
    }

    #[test]
    fn test_total_equals_sum_for_many_seeds() {
        let generator = PortfolioGenerator::default();
        let market = market();

        for seed in 0..200 {
            let mut rng = demo_rng(Some(seed));
            let portfolio = generator.generate(&mut rng, &market).unwrap();

            let sum: Decimal = portfolio.holdings().map(|h| h.quantity * h.price_usd).sum();
            assert_eq!(portfolio.total_value(), sum, "seed {seed}");
            assert!((3..=6).contains(&portfolio.len()), "seed {seed}");
        }
    }

    #[test]
    fn test_holdings_are_distinct_and_positive() {
        let generator = PortfolioGenerator::default();
        let mut rng = demo_rng(Some(42));
        let portfolio = generator.generate(&mut rng, &market()).unwrap();

        let symbols: HashSet<_> = portfolio.holdings().map(|h| h.symbol.clone()).collect();
        assert_eq!(symbols.len(), portfolio.len());
        for holding in portfolio.holdings() {
            assert!(holding.quantity > Decimal::ZERO);
            assert!(holding.price_usd > Decimal::ZERO);
        }
    }

    #[test]
    fn test_price_stays_within_jitter() {
        let generator = PortfolioGenerator::default();
        let market = market();

        for seed in 0..50 {
            let mut rng = demo_rng(Some(seed));
            let portfolio = generator.generate(&mut rng, &market).unwrap();
            for holding in portfolio.holdings() {
                let quote = market.iter().find(|a| a.symbol == holding.symbol).unwrap();
                // one cent of rounding slack on either side
                let low = quote.price_usd * dec!(0.95) - dec!(0.01);
                let high = quote.price_usd * dec!(1.05) + dec!(0.01);
                assert!(holding.price_usd >= low && holding.price_usd <= high);
            }
        }
    }

    #[test]
    fn test_same_seed_same_portfolio() {
        let generator = PortfolioGenerator::default();
        let market = market();

        let a = generator.generate(&mut demo_rng(Some(7)), &market).unwrap();
        let b = generator.generate(&mut demo_rng(Some(7)), &market).unwrap();
        assert_eq!(a.holdings().collect::<Vec<_>>(), b.holdings().collect::<Vec<_>>());
    }

    #[test]
    fn test_small_market_caps_asset_count() {
        let generator = PortfolioGenerator::default();
        let market = vec![Asset::new("BTC", "Bitcoin", dec!(60000))];

        let portfolio = generator.generate(&mut demo_rng(Some(1)), &market).unwrap();
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_empty_market() {
        let generator = PortfolioGenerator::default();
        let result = generator.generate(&mut demo_rng(Some(1)), &[]);
        assert!(matches!(result, Err(AdvisorError::EmptyMarket)));
    }

    #[test]
    fn test_invalid_config() {
        let config = GeneratorConfig { min_assets: 5, max_assets: 2, ..Default::default() };
        assert!(matches!(PortfolioGenerator::new(config), Err(AdvisorError::Config(_))));

        let config = GeneratorConfig { price_jitter_percent: 100, ..Default::default() };
        assert!(PortfolioGenerator::new(config).is_err());
    }
}
