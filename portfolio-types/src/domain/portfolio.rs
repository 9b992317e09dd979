//! Ordered collection of currency-tagged amounts.

use exchange_rates::{ConversionResult, Currency, CurrencyCode, ExchangeRateTable, Money};
use serde::{Deserialize, Serialize};

use crate::error::MissingExchangeRatesError;

/// Immutable sequence of money lines, possibly in different currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio<C = CurrencyCode> {
    lines: Vec<Money<C>>,
}

impl<C: Currency> Portfolio<C> {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Returns a new portfolio with `money` appended.
    #[must_use]
    pub fn add_money(&self, money: Money<C>) -> Self {
        let mut lines = self.lines.clone();
        lines.push(money);
        Self { lines }
    }

    pub fn lines(&self) -> &[Money<C>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Evaluates the total of every line expressed in `to`.
    ///
    /// Every line is converted, even after a failure. If any line has no rate,
    /// the error lists one entry per failing line in portfolio order, without
    /// deduplication. Otherwise the converted amounts are summed left to right.
    pub fn evaluate(
        &self,
        table: &ExchangeRateTable<C>,
        to: C,
    ) -> Result<Money<C>, MissingExchangeRatesError<C>> {
        let conversions: Vec<ConversionResult<C>> = self
            .lines
            .iter()
            .map(|money| table.convert(*money, to))
            .collect();

        let errors: Vec<_> = conversions
            .iter()
            .filter_map(|result| result.as_ref().err().copied())
            .collect();
        if !errors.is_empty() {
            return Err(MissingExchangeRatesError::new(errors));
        }

        let total = conversions
            .iter()
            .filter_map(|result| result.as_ref().ok())
            .fold(0.0, |sum, money| sum + money.amount());

        Ok(Money::new(total, to))
    }
}

impl<C: Currency> Default for Portfolio<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Currency> FromIterator<Money<C>> for Portfolio<C> {
    fn from_iter<I: IntoIterator<Item = Money<C>>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
