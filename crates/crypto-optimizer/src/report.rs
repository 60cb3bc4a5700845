//! Console Report
//!
//! Human-readable rendering of each demo stage. Everything writes to a
//! caller-supplied `io::Write` so the binary prints to stdout and tests
//! capture into a buffer.

use std::io::{self, Write};

use crate::model::{Portfolio, Recommendation};
use crate::transaction::TransactionRequest;

const WIDTH: usize = 80;

fn rule(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(WIDTH))
}

fn banner(w: &mut impl Write, title: &str) -> io::Result<()> {
    rule(w)?;
    writeln!(w, "{title}")?;
    rule(w)
}

/// Opening banner with the demo outline
///
/// # Errors
///
/// Propagates write failures.
pub fn write_intro(w: &mut impl Write) -> io::Result<()> {
    banner(w, "CRYPTO PORTFOLIO OPTIMIZER - DEMO")?;
    writeln!(w)?;
    writeln!(w, "📊 This demo will:")?;
    writeln!(w, "   1. Generate a random crypto portfolio")?;
    writeln!(w, "   2. Show current prices and holdings")?;
    writeln!(w, "   3. Simulate a transaction request")?;
    writeln!(w, "   4. Provide AI-powered recommendations")?;
    writeln!(w)?;
    rule(w)?;
    writeln!(w)
}

/// One row per holding plus the total
///
/// # Errors
///
/// Propagates write failures.
pub fn write_portfolio(w: &mut impl Write, portfolio: &Portfolio) -> io::Result<()> {
    let valuation = portfolio.valuation();

    writeln!(w)?;
    banner(w, &format!("📈 {}", portfolio.name.to_uppercase()))?;
    writeln!(
        w,
        "{:<7} {:<14} {:>16} {:>12} {:>8} {:>12} {:>6}",
        "Symbol", "Name", "Quantity", "Price", "24h", "Value", "Alloc"
    )?;
    writeln!(w, "{}", "-".repeat(WIDTH))?;

    for (holding, value) in portfolio.holdings().zip(&valuation.holdings) {
        writeln!(
            w,
            "{:<7} {:<14} {:>16} {:>12} {:>7}% {:>12} {:>5}%",
            holding.symbol,
            holding.name,
            holding.quantity.normalize().to_string(),
            format!("${:.2}", holding.price_usd),
            format!("{:+.1}", holding.change_24h),
            format!("${:.2}", value.value),
            format!("{:.1}", value.allocation_percent),
        )?;
    }

    writeln!(w, "{}", "-".repeat(WIDTH))?;
    writeln!(w, "{:<7} {:>73}", "TOTAL", format!("${:.2}", valuation.total_value))?;
    rule(w)
}

/// Transaction banner with amount and purpose
///
/// # Errors
///
/// Propagates write failures.
pub fn write_transaction(w: &mut impl Write, request: &TransactionRequest) -> io::Result<()> {
    writeln!(w)?;
    banner(w, "💸 TRANSACTION REQUEST")?;
    writeln!(w, "Amount: ${:.2}", request.amount_cents())?;
    writeln!(w, "Purpose: {}", request.purpose)?;
    rule(w)
}

/// The model's text, verbatim
///
/// # Errors
///
/// Propagates write failures.
pub fn write_recommendation(w: &mut impl Write, recommendation: &Recommendation) -> io::Result<()> {
    writeln!(w, "{recommendation}")
}

/// Closing banner
///
/// # Errors
///
/// Propagates write failures.
pub fn write_completion(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    banner(w, "✅ DEMO COMPLETE!")?;
    writeln!(w)?;
    writeln!(w, "💡 Set DEMO_SEED to replay the same portfolio and transaction.")?;
    writeln!(w, "💡 Set OPENAI_MODEL to try a different model.")?;
    rule(w)
}
