//! Monetary values with exact decimal arithmetic.
//!
//! - [`Money`] pairs an immutable decimal amount with a [`Currency`]
//! - [`XMoney`] converts mismatched currencies through the exchange registry
//! - named `try_*` operations are canonical; operators are thin sugar
//! - [`LocaleFormatter`] is the seam for locale-aware rendering

pub mod currency;
pub mod error;
pub mod format;
mod ops;
pub mod policy;
pub mod value;

#[cfg(test)]
mod props;

pub use currency::Currency;
pub use error::{MoneyError, Op};
pub use format::LocaleFormatter;
pub use policy::{Converting, CurrencyPolicy, Strict};
pub use value::{Money, MoneyResult, XMoney};
