//! The exchange backend contract.

use std::any::Any;
use std::fmt;

use rust_decimal::Decimal;

use crate::money::Currency;

/// A source of exchange rates, all expressed against one base currency.
///
/// Point lookups answer with `Option`: `None` means the backend has no data
/// for that currency, which callers treat differently from the registry's
/// "no backend installed" failure. Implementations must rate the base
/// currency itself at exactly 1 so that quotations through the base
/// collapse correctly.
pub trait ExchangeBackend: Any + fmt::Debug + Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// The base currency rates are expressed against, once configured.
    fn base(&self) -> Option<Currency>;

    /// Units of `currency` equivalent to one unit of the base.
    fn rate(&self, currency: Currency) -> Option<Decimal>;

    /// Units of `to` equivalent to one unit of `from`.
    ///
    /// Derived transitively through the base as `rate(to) / rate(from)`,
    /// which is not the same thing as `rate(to)` alone. `None` when either
    /// rate is unknown or zero.
    fn quotation(&self, from: Currency, to: Currency) -> Option<Decimal> {
        let a = self.rate(from)?;
        let b = self.rate(to)?;
        if a.is_zero() || b.is_zero() {
            return None;
        }
        Some(b / a)
    }
}
