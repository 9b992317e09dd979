//! # Portfolio Repository
//!
//! Repository adapters for the portfolio service.
//! This crate provides the in-memory adapter that implements the
//! `BankRepository` port. Nothing is written to disk.

use std::sync::RwLock;

use portfolio_types::{BankRepository, ExchangeRateTable, RepoError};

/// Holds the bank for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryBankRepo {
    bank: RwLock<Option<ExchangeRateTable>>,
}

impl InMemoryBankRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `bank`.
    pub fn with_bank(bank: ExchangeRateTable) -> Self {
        Self {
            bank: RwLock::new(Some(bank)),
        }
    }
}

fn poisoned<T>(_: T) -> RepoError {
    RepoError::Storage("bank lock poisoned".into())
}

impl BankRepository for InMemoryBankRepo {
    fn exists(&self) -> Result<bool, RepoError> {
        Ok(self.bank.read().map_err(poisoned)?.is_some())
    }

    fn get_bank(&self) -> Result<Option<ExchangeRateTable>, RepoError> {
        Ok(self.bank.read().map_err(poisoned)?.clone())
    }

    fn save(&self, bank: ExchangeRateTable) -> Result<(), RepoError> {
        tracing::debug!(rates = bank.rate_count(), "saving bank");
        *self.bank.write().map_err(poisoned)? = Some(bank);
        Ok(())
    }
}
