//! Data Transfer Objects (DTOs) for use-case requests and responses.

use serde::{Deserialize, Serialize};

use exchange_rates::{CurrencyCode, ExchangeRate, Money};

// ─────────────────────────────────────────────────────────────────────────────
// Bank DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create the bank with its first exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetupBankRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: ExchangeRate,
}

/// Request to register or replace a rate on an existing bank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddExchangeRateRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: ExchangeRate,
}

// ─────────────────────────────────────────────────────────────────────────────
// Valuation DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert a single amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub amount: f64,
    pub currency: CurrencyCode,
    #[serde(default = "default_currency")]
    pub to: CurrencyCode,
}

/// Request to value a portfolio in one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatePortfolioRequest {
    pub lines: Vec<Money>,
    #[serde(default = "default_currency")]
    pub to: CurrencyCode,
}

fn default_currency() -> CurrencyCode {
    CurrencyCode::USD
}

/// Result of a successful valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResponse {
    pub amount: f64,
    pub currency: CurrencyCode,
    /// Number of portfolio lines that were converted
    pub lines: usize,
}

impl ValuationResponse {
    pub fn new(total: Money, lines: usize) -> Self {
        Self {
            amount: total.amount(),
            currency: total.currency(),
            lines,
        }
    }
}
