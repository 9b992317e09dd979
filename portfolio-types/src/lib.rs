//! # Portfolio Types
//!
//! Domain types and port traits for multi-currency portfolio valuation.
//! This crate has ZERO IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Portfolio and its evaluation)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the use-case boundary
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::Portfolio;
pub use dto::*;
pub use error::{AppError, MissingExchangeRatesError, RepoError};
pub use exchange_rates::{
    ConversionResult, CurrencyCode, CurrencyPair, ExchangeRate, ExchangeRateTable,
    MissingExchangeRateError, Money,
};
pub use ports::BankRepository;
