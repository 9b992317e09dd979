//! Directed Exchange Rate Table
//!
//! Currency-tagged money and an immutable table of explicitly registered
//! exchange rates. Rates are keyed by a directed currency pair: a rate for
//! `EUR -> USD` says nothing about `USD -> EUR`, and no path is ever derived
//! through a third currency.
//!
//! Converting a currency to itself always succeeds at rate 1 without a
//! table entry.
//!
//! # Example
//! ```
//! use exchange_rates::{CurrencyCode, ExchangeRateTable, MissingExchangeRateError, Money};
//!
//! let table = ExchangeRateTable::with_exchange_rate(CurrencyCode::EUR, CurrencyCode::USD, 1.2);
//!
//! let dollars = table.convert(Money::new(10.0, CurrencyCode::EUR), CurrencyCode::USD);
//! assert_eq!(dollars, Ok(Money::new(12.0, CurrencyCode::USD)));
//!
//! let won = table.convert(Money::new(10.0, CurrencyCode::EUR), CurrencyCode::KRW);
//! assert_eq!(
//!     won,
//!     Err(MissingExchangeRateError::new(CurrencyCode::EUR, CurrencyCode::KRW))
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Currency Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Any comparable, hashable currency identifier.
///
/// Blanket-implemented, so the table and money types work with the bundled
/// [`CurrencyCode`] as well as with an application's own enumeration.
pub trait Currency: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Currency for T where T: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// Multiplier applied to an amount when converting between two currencies.
pub type ExchangeRate = f64;

// ─────────────────────────────────────────────────────────────────────────────
// Money
// ─────────────────────────────────────────────────────────────────────────────

/// An amount paired with the currency it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money<C = CurrencyCode> {
    amount: f64,
    currency: C,
}

impl<C: Currency> Money<C> {
    pub fn new(amount: f64, currency: C) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: C) -> Self {
        Self::new(0.0, currency)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> C {
        self.currency
    }

    /// Scales the amount, keeping the currency.
    pub fn times(self, factor: f64) -> Self {
        Self::new(self.amount * factor, self.currency)
    }
}

impl<C: Currency> Mul<f64> for Money<C> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.times(rhs)
    }
}

impl<C: Currency> fmt::Display for Money<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// No rate is registered for converting `from` into `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{from}->{to}")]
pub struct MissingExchangeRateError<C: Currency = CurrencyCode> {
    pub from: C,
    pub to: C,
}

impl<C: Currency> MissingExchangeRateError<C> {
    pub fn new(from: C, to: C) -> Self {
        Self { from, to }
    }
}

/// Outcome of converting a single amount.
pub type ConversionResult<C = CurrencyCode> = Result<Money<C>, MissingExchangeRateError<C>>;

/// A currency code that is not part of [`CurrencyCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// Exchange Rate Table
// ─────────────────────────────────────────────────────────────────────────────

/// Directed `(from, to)` key of the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair<C = CurrencyCode> {
    pub from: C,
    pub to: C,
}

impl<C: Currency> CurrencyPair<C> {
    pub fn new(from: C, to: C) -> Self {
        Self { from, to }
    }
}

impl<C: Currency> fmt::Display for CurrencyPair<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Immutable table of explicitly registered exchange rates.
///
/// Every update returns a new table; the receiver is never modified. The
/// identity rule (`C -> C` at rate 1) is applied before lookup and is never
/// stored. A stored rate of `0.0` is a real rate, distinct from a missing one.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRateTable<C: Currency = CurrencyCode> {
    rates: HashMap<CurrencyPair<C>, ExchangeRate>,
}

impl<C: Currency> ExchangeRateTable<C> {
    /// Creates a table holding exactly one explicit rate.
    pub fn with_exchange_rate(from: C, to: C, rate: ExchangeRate) -> Self {
        Self {
            rates: HashMap::new(),
        }
        .add_exchange_rate(from, to, rate)
    }

    /// Returns a copy of this table with the `from -> to` rate set.
    ///
    /// An existing rate for the same pair is replaced.
    #[must_use]
    pub fn add_exchange_rate(&self, from: C, to: C, rate: ExchangeRate) -> Self {
        let mut rates = self.rates.clone();
        rates.insert(CurrencyPair::new(from, to), rate);
        Self { rates }
    }

    pub fn can_convert(&self, from: C, to: C) -> bool {
        from == to || self.rates.contains_key(&CurrencyPair::new(from, to))
    }

    /// Rate applied for `from -> to`, `Some(1.0)` for identity.
    pub fn rate(&self, from: C, to: C) -> Option<ExchangeRate> {
        if from == to {
            return Some(1.0);
        }
        self.rates.get(&CurrencyPair::new(from, to)).copied()
    }

    /// Converts `money` into `to`.
    ///
    /// Identity conversions return `money` untouched so the amount is exact.
    pub fn convert(&self, money: Money<C>, to: C) -> ConversionResult<C> {
        if money.currency() == to {
            return Ok(money);
        }
        match self.rates.get(&CurrencyPair::new(money.currency(), to)) {
            Some(rate) => Ok(Money::new(money.amount() * rate, to)),
            None => Err(MissingExchangeRateError::new(money.currency(), to)),
        }
    }

    /// Number of explicitly registered pairs.
    pub fn rate_count(&self) -> usize {
        self.rates.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency enumeration
// ─────────────────────────────────────────────────────────────────────────────

/// Defines the closed [`CurrencyCode`] enumeration.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CurrencyName => ("CODE", "SYMBOL"),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal)
        ),* $(,)?
    ) => {
        /// Currencies known to the application.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

define_currencies! {
    USD => ("USD", "$"),
    EUR => ("EUR", "€"),
    KRW => ("KRW", "₩"),
    GBP => ("GBP", "£"),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
