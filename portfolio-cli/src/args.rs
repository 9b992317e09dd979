//! Parsers for the `FROM:TO:RATE` and `AMOUNT:CURRENCY` argument forms.

use anyhow::{Context, Result};
use portfolio_types::{CurrencyCode, ExchangeRate, Money};

pub fn parse_currency(s: &str) -> Result<CurrencyCode> {
    s.parse().map_err(|_| {
        let supported: Vec<&str> = CurrencyCode::all().iter().map(|c| c.code()).collect();
        anyhow::anyhow!("Unknown currency: {}. Supported: {}", s, supported.join(", "))
    })
}

/// Parses `EUR:USD:1.2`.
pub fn parse_rate(s: &str) -> Result<(CurrencyCode, CurrencyCode, ExchangeRate)> {
    let parts: Vec<&str> = s.split(':').collect();
    let [from, to, rate] = parts.as_slice() else {
        anyhow::bail!("Invalid rate: {}. Expected FROM:TO:RATE", s);
    };
    let rate = rate
        .trim()
        .parse()
        .with_context(|| format!("Invalid rate value in {}", s))?;
    Ok((parse_currency(from)?, parse_currency(to)?, rate))
}

/// Parses `10:EUR`.
pub fn parse_money(s: &str) -> Result<Money> {
    let Some((amount, currency)) = s.split_once(':') else {
        anyhow::bail!("Invalid money: {}. Expected AMOUNT:CURRENCY", s);
    };
    let amount = amount
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount in {}", s))?;
    Ok(Money::new(amount, parse_currency(currency)?))
}
