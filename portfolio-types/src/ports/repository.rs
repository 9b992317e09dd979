//! Bank repository port.
//!
//! Adapters (in-memory, test fakes) implement this trait to hold the
//! exchange rate table between use-case calls.

use exchange_rates::ExchangeRateTable;

use crate::error::RepoError;

/// Storage for the single exchange rate table ("bank") of the application.
pub trait BankRepository: Send + Sync + 'static {
    /// Returns true once a bank has been saved.
    fn exists(&self) -> Result<bool, RepoError>;

    /// Gets the current bank, if any.
    fn get_bank(&self) -> Result<Option<ExchangeRateTable>, RepoError>;

    /// Stores `bank`, replacing any previous one.
    fn save(&self, bank: ExchangeRateTable) -> Result<(), RepoError>;
}
