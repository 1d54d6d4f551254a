//! Error types for monetary construction, parsing, and arithmetic.
//!
//! Two failure classes from looser ecosystems have no variant here because
//! they cannot occur: operands are statically typed, so "comparison against
//! a non-monetary object" is inexpressible, and no operator implementation
//! exists for money-times-money, money-modulo-money, or money-to-the-power-
//! of-money. What remains below are genuine runtime conditions.

use std::fmt;

use thiserror::Error;

use super::currency::Currency;
use crate::exchange::ExchangeError;

/// Binary operator names carried in [`MoneyError::CurrencyMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Division yielding a dimensionless ratio.
    Div,
    /// Truncating integer division.
    FloorDiv,
    /// Combined quotient and remainder.
    DivMod,
    /// Ordering comparison.
    Cmp,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::DivMod => "divmod",
            Self::Cmp => "cmp",
        })
    }
}

/// Errors that can occur constructing, parsing, or combining monetary values.
#[derive(Debug, Error)]
pub enum MoneyError {
    // ========== Construction Errors ==========
    /// Amount text could not be parsed as an exact decimal.
    #[error("amount could not be converted to a decimal: {value:?}")]
    InvalidAmount {
        /// The rejected amount text.
        value: String,
    },

    /// Currency code is not three uppercase ASCII letters.
    #[error("invalid currency: {code:?} (expected three uppercase letters)")]
    InvalidCurrency {
        /// The rejected code.
        code: String,
    },

    // ========== Arithmetic Errors ==========
    /// Binary operation between two currencies without conversion.
    #[error(
        "unsupported operation between money in '{lhs}' and '{rhs}': '{op}'; \
         use XMoney for automatic currency conversion"
    )]
    CurrencyMismatch {
        /// Currency of the left operand.
        lhs: Currency,
        /// Currency of the right operand.
        rhs: Currency,
        /// The attempted operator.
        op: Op,
    },

    /// Division, floor division, remainder, or divmod by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Result magnitude exceeds what a `Decimal` can hold.
    #[error("amount out of range for a decimal")]
    Overflow,

    // ========== Parse Errors ==========
    /// Input does not match the canonical `"CCY amount"` form.
    #[error("cannot parse money from {input:?}: {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    // ========== Exchange Errors ==========
    /// Currency conversion failed in the exchange layer.
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}
