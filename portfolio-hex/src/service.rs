//! Bank Application Service
//!
//! Orchestrates domain operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use portfolio_types::{
    AddExchangeRateRequest, AppError, BankRepository, ConvertRequest, EvaluatePortfolioRequest,
    ExchangeRate, ExchangeRateTable, Money, Portfolio, SetupBankRequest, ValuationResponse,
};

/// Application service for bank and portfolio operations.
///
/// Generic over `R: BankRepository` - the adapter is injected at compile time.
pub struct BankService<R: BankRepository> {
    repo: R,
}

impl<R: BankRepository> BankService<R> {
    /// Creates a new bank service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Bank Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates the bank with its first exchange rate.
    pub fn setup_bank(&self, req: SetupBankRequest) -> Result<(), AppError> {
        validate_rate(req.rate)?;

        if self.repo.exists()? {
            tracing::warn!(from = %req.from, to = %req.to, "bank already setup");
            return Err(AppError::Conflict("Bank is already setup".into()));
        }

        tracing::debug!(from = %req.from, to = %req.to, rate = req.rate, "setting up bank");
        self.repo
            .save(ExchangeRateTable::with_exchange_rate(req.from, req.to, req.rate))
            .map_err(Into::into)
    }

    /// Registers a rate on the existing bank, replacing any previous rate for the pair.
    pub fn add_exchange_rate(&self, req: AddExchangeRateRequest) -> Result<(), AppError> {
        validate_rate(req.rate)?;

        let bank = self.bank()?;
        tracing::debug!(from = %req.from, to = %req.to, rate = req.rate, "adding exchange rate");
        self.repo
            .save(bank.add_exchange_rate(req.from, req.to, req.rate))
            .map_err(Into::into)
    }

    /// Gets the current bank.
    pub fn bank(&self) -> Result<ExchangeRateTable, AppError> {
        self.repo
            .get_bank()
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound("Bank is not setup".into())))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Valuation
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts a single amount.
    pub fn convert(&self, req: ConvertRequest) -> Result<Money, AppError> {
        let bank = self.bank()?;
        let converted = bank.convert(Money::new(req.amount, req.currency), req.to)?;
        Ok(converted)
    }

    /// Values a portfolio in the requested currency.
    ///
    /// Fails with every missing rate at once rather than the first one.
    pub fn evaluate(&self, req: EvaluatePortfolioRequest) -> Result<ValuationResponse, AppError> {
        let bank = self.bank()?;
        let portfolio: Portfolio = req.lines.into_iter().collect();

        match portfolio.evaluate(&bank, req.to) {
            Ok(total) => {
                tracing::debug!(lines = portfolio.len(), total = %total, "portfolio evaluated");
                Ok(ValuationResponse::new(total, portfolio.len()))
            }
            Err(missing) => {
                tracing::warn!(to = %req.to, missing = missing.errors.len(), "{missing}");
                Err(missing.into())
            }
        }
    }
}

fn validate_rate(rate: ExchangeRate) -> Result<(), AppError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest("The command is invalid".into()))
    }
}
