//! Currency reconciliation policies.
//!
//! A policy decides what a binary operation does when its two operands
//! carry different currencies: [`Strict`] rejects the operation, while
//! [`Converting`] re-expresses the right-hand side in the left-hand
//! currency through the process-wide exchange registry. Same-currency
//! operations never consult the policy.

use rust_decimal::Decimal;

use super::currency::Currency;
use super::error::{MoneyError, Op};
use super::value::Money;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Strict {}
    impl Sealed for super::Converting {}
}

/// Decides how a binary operation reconciles mismatched currencies.
///
/// Sealed; implemented only by [`Strict`] and [`Converting`]. Policies are
/// zero-sized markers, so the `Copy` and equality bounds here let
/// [`Money`]'s derives apply for any policy parameter.
pub trait CurrencyPolicy: sealed::Sealed + Copy + PartialEq + Eq + 'static {
    /// Produces the amount of `rhs` expressed in `target`, or fails.
    fn reconcile(target: Currency, rhs: &Money<Self>, op: Op) -> Result<Decimal, MoneyError>;
}

/// Rejects operations between different currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strict;

/// Converts the right-hand operand through the process-wide registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converting;

impl CurrencyPolicy for Strict {
    fn reconcile(target: Currency, rhs: &Money<Self>, op: Op) -> Result<Decimal, MoneyError> {
        Err(MoneyError::CurrencyMismatch {
            lhs: target,
            rhs: rhs.currency(),
            op,
        })
    }
}

impl CurrencyPolicy for Converting {
    fn reconcile(target: Currency, rhs: &Money<Self>, _op: Op) -> Result<Decimal, MoneyError> {
        Ok(rhs.to(target)?.amount())
    }
}
