//! Domain models for portfolio valuation.

pub mod portfolio;

pub use portfolio::Portfolio;
