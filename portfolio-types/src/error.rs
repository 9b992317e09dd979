//! Error types for portfolio valuation.

use exchange_rates::{Currency, CurrencyCode, MissingExchangeRateError};
use serde::{Deserialize, Serialize};

/// Every line of a portfolio that could not be converted, in portfolio order.
///
/// Produced only by portfolio evaluation; single conversions report a bare
/// [`MissingExchangeRateError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Missing exchange rates: {}", join_pairs(.errors))]
pub struct MissingExchangeRatesError<C: Currency = CurrencyCode> {
    pub errors: Vec<MissingExchangeRateError<C>>,
}

impl<C: Currency> MissingExchangeRatesError<C> {
    pub fn new(errors: Vec<MissingExchangeRateError<C>>) -> Self {
        Self { errors }
    }
}

fn join_pairs<C: Currency>(errors: &[MissingExchangeRateError<C>]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Repository-level errors (storage failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application-level errors (use-case outcomes).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing exchange rate: {0}")]
    MissingExchangeRate(#[from] MissingExchangeRateError),

    #[error(transparent)]
    MissingExchangeRates(#[from] MissingExchangeRatesError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Storage(e) => AppError::Internal(e),
        }
    }
}
