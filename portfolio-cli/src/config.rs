//! Configuration loading from environment.

use std::env;

use portfolio_types::CurrencyCode;

const DEFAULT_LOG_FILTER: &str = "info,portfolio_hex=debug";

/// Application configuration.
pub struct Config {
    pub default_currency: CurrencyCode,
    pub log_filter: String,
    pub log_json: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let default_currency = env::var("PORTFOLIO_CURRENCY")
            .unwrap_or_else(|_| "USD".to_string())
            .parse()?;

        let log_filter =
            env::var("PORTFOLIO_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        let log_json = env::var("PORTFOLIO_LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            default_currency,
            log_filter,
            log_json,
        })
    }
}
