//! Exact monetary values with pluggable exchange rates.
//!
//! This crate contains pure value types and rate lookup with ZERO I/O
//! dependencies. Amounts are `rust_decimal::Decimal` end to end; no
//! floating point ever touches a stored value.
//!
//! # Modules
//!
//! - `money` - Immutable amount-with-currency values and their arithmetic
//! - `exchange` - Rate backends and the process-wide registry
//!
//! # Example
//!
//! ```
//! use moneta_core::{Currency, Money};
//!
//! let price: Money = "EUR 2.22".parse()?;
//! let total = (price + Money::new(1, Currency::new("EUR")?))?;
//! assert_eq!(total.to_string(), "EUR 3.22");
//! # Ok::<(), moneta_core::MoneyError>(())
//! ```

pub mod exchange;
pub mod money;

pub use exchange::{ExchangeBackend, ExchangeError, Registry, SimpleBackend, xrates};
pub use money::{Currency, Money, MoneyError, XMoney};
