//! In-memory reference backend.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::money::Currency;

use super::backend::ExchangeBackend;
use super::error::ExchangeError;

/// A hand-maintained rate table, all rates relative to one base currency.
///
/// Suitable for tests and fixed-rate applications; live rate sources belong
/// in their own [`ExchangeBackend`] implementations. The base must be set
/// before any rate can be recorded, since rates have no meaning without it.
#[derive(Debug, Clone, Default)]
pub struct SimpleBackend {
    base: Option<Currency>,
    rates: HashMap<Currency, Decimal>,
}

impl SimpleBackend {
    /// Creates an empty backend with no base currency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base currency.
    ///
    /// Recorded rates keep their values and are reinterpreted against the
    /// new base.
    pub fn set_base(&mut self, base: Currency) {
        self.base = Some(base);
    }

    /// Records the rate for `currency` relative to the base.
    ///
    /// Fails with [`ExchangeError::BaseNotSet`] until a base is configured.
    pub fn set_rate(&mut self, currency: Currency, rate: Decimal) -> Result<(), ExchangeError> {
        if self.base.is_none() {
            return Err(ExchangeError::BaseNotSet);
        }
        self.rates.insert(currency, rate);
        Ok(())
    }
}

impl ExchangeBackend for SimpleBackend {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn base(&self) -> Option<Currency> {
        self.base
    }

    fn rate(&self, currency: Currency) -> Option<Decimal> {
        // The base rates at exactly 1 regardless of table contents.
        if self.base == Some(currency) {
            return Some(Decimal::ONE);
        }
        self.rates.get(&currency).copied()
    }
}
