//! # Portfolio Hex
//!
//! Application service layer for the portfolio valuation service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//!
//! The service is generic over `R: BankRepository`, allowing
//! different repository implementations to be injected.

pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::BankService;
