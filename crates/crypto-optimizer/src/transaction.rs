//! Transaction Requests
//!
//! A simulated outgoing payment drawn against the portfolio: an amount between
//! 20% and 40% of total value and one of a fixed set of purposes.

use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lower bound of the requested amount, as a fraction of portfolio value
pub const MIN_AMOUNT_FRACTION: Decimal = dec!(0.20);

/// Upper bound of the requested amount, as a fraction of portfolio value
pub const MAX_AMOUNT_FRACTION: Decimal = dec!(0.40);

/// Sampling resolution for the amount fraction (parts per million)
const FRACTION_SCALE: u32 = 6;

/// Why the money is being spent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    PaymentToFriend,
    OnlinePurchase,
    ServicePayment,
}

impl Purpose {
    pub const ALL: [Self; 3] = [Self::PaymentToFriend, Self::OnlinePurchase, Self::ServicePayment];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaymentToFriend => "payment to friend",
            Self::OnlinePurchase => "online purchase",
            Self::ServicePayment => "service payment",
        }
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to pay `amount` USD for `purpose`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub amount: Decimal,
    pub purpose: Purpose,
}

impl TransactionRequest {
    pub const fn new(amount: Decimal, purpose: Purpose) -> Self {
        Self { amount, purpose }
    }

    /// Amount rounded to cents for display
    #[must_use]
    pub fn amount_cents(&self) -> Decimal {
        self.amount.round_dp(2)
    }
}

/// Inclusive bounds for an amount drawn against `total_value`
#[must_use]
pub fn amount_bounds(total_value: Decimal) -> (Decimal, Decimal) {
    (total_value * MIN_AMOUNT_FRACTION, total_value * MAX_AMOUNT_FRACTION)
}

/// Sample a transaction against a portfolio worth `total_value`.
///
/// The fraction is uniform over [0.20, 0.40] at parts-per-million steps and
/// the amount is kept unrounded, so it never leaves [`amount_bounds`].
pub fn sample_request<R: Rng + ?Sized>(rng: &mut R, total_value: Decimal) -> TransactionRequest {
    let scale = Decimal::new(1, FRACTION_SCALE);
    let lo = fraction_steps(MIN_AMOUNT_FRACTION);
    let hi = fraction_steps(MAX_AMOUNT_FRACTION);

    let fraction = Decimal::from(rng.random_range(lo..=hi)) * scale;
    let purpose = *Purpose::ALL.choose(rng).unwrap_or(&Purpose::ServicePayment);

    TransactionRequest::new(total_value * fraction, purpose)
}

/// Number of parts-per-million steps in `fraction`
fn fraction_steps(fraction: Decimal) -> u64 {
    let steps = fraction * Decimal::from(10_u64.pow(FRACTION_SCALE));
    u64::try_from(steps).unwrap_or_default()
}
