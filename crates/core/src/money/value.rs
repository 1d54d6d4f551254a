//! The monetary value type.
//!
//! CRITICAL: Never use floating-point for money calculations. Amounts are
//! `rust_decimal::Decimal` throughout; the only float surface is the
//! explicitly lossy [`Money::to_f64`].

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::exchange::{ExchangeError, Registry, xrates};

use super::currency::Currency;
use super::error::{MoneyError, Op};
use super::policy::{Converting, CurrencyPolicy, Strict};

/// Result alias for fallible monetary operations.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// An immutable amount of a single currency.
///
/// Pairs an exact decimal amount with a currency code. Every operation
/// returns a new value; nothing mutates in place, and the amount is stored
/// exactly as given with no rounding at construction. The policy parameter
/// decides what a binary operation does when its operands carry different
/// currencies: [`Strict`] (the default) rejects with
/// [`MoneyError::CurrencyMismatch`], [`Converting`] converts the right-hand
/// side through the process-wide registry first.
///
/// Equality compares amount and currency and never fails; values in
/// different currencies are simply unequal. Ordering between currencies is
/// undefined, so `Money` is [`PartialOrd`] but not [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money<P: CurrencyPolicy = Strict> {
    amount: Decimal,
    currency: Currency,
    #[serde(skip)]
    policy: PhantomData<P>,
}

/// Money that auto-converts mismatched currencies via the active backend.
pub type XMoney = Money<Converting>;

impl<P: CurrencyPolicy> Money<P> {
    /// Creates a value from a typed amount.
    #[must_use]
    pub fn new(amount: impl Into<Decimal>, currency: Currency) -> Self {
        Self {
            amount: amount.into(),
            currency,
            policy: PhantomData,
        }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Parses amount and currency from their text forms.
    ///
    /// The amount must be an exact decimal number (plain or scientific
    /// notation) and the currency three uppercase letters. The parsed
    /// amount is stored as written, trailing zeros included.
    pub fn from_parts(amount: &str, currency: &str) -> MoneyResult<Self> {
        let parsed = amount
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(amount))
            .map_err(|_| MoneyError::InvalidAmount {
                value: amount.to_string(),
            })?;
        Ok(Self::new(parsed, Currency::new(currency)?))
    }

    // ========== Accessors ==========

    /// The exact decimal amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency code.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    /// This value under the strict policy.
    #[must_use]
    pub fn into_strict(self) -> Money<Strict> {
        Money::new(self.amount, self.currency)
    }

    /// This value under the converting policy.
    #[must_use]
    pub fn into_converting(self) -> XMoney {
        Money::new(self.amount, self.currency)
    }

    /// The amount of `other` expressed in this value's currency.
    fn reconciled(&self, other: &Self, op: Op) -> MoneyResult<Decimal> {
        if self.currency == other.currency {
            Ok(other.amount)
        } else {
            P::reconcile(self.currency, other, op)
        }
    }

    // ========== Money-With-Money Operations ==========

    /// Adds another monetary value.
    ///
    /// The result keeps this value's currency. Fails with
    /// [`MoneyError::CurrencyMismatch`] under the strict policy when
    /// currencies differ; the converting policy converts `other` first.
    pub fn try_add(&self, other: &Self) -> MoneyResult<Self> {
        let rhs = self.reconciled(other, Op::Add)?;
        Ok(Self::new(self.amount + rhs, self.currency))
    }

    /// Subtracts another monetary value.
    pub fn try_sub(&self, other: &Self) -> MoneyResult<Self> {
        let rhs = self.reconciled(other, Op::Sub)?;
        Ok(Self::new(self.amount - rhs, self.currency))
    }

    /// Divides by another monetary value, yielding a dimensionless ratio.
    ///
    /// The currency unit cancels. Fails with
    /// [`MoneyError::DivisionByZero`] for a zero divisor.
    pub fn try_div(&self, other: &Self) -> MoneyResult<Decimal> {
        let rhs = self.reconciled(other, Op::Div)?;
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(self.amount / rhs)
    }

    /// Divides by another monetary value, truncating toward zero.
    pub fn try_floordiv(&self, other: &Self) -> MoneyResult<Decimal> {
        let rhs = self.reconciled(other, Op::FloorDiv)?;
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok((self.amount / rhs).trunc())
    }

    /// Quotient and remainder against another monetary value.
    ///
    /// Both halves are dimensionless. The quotient truncates toward zero
    /// and the remainder keeps the dividend's sign.
    pub fn try_divmod(&self, other: &Self) -> MoneyResult<(Decimal, Decimal)> {
        let rhs = self.reconciled(other, Op::DivMod)?;
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = (self.amount / rhs).trunc();
        Ok((quotient, self.amount - quotient * rhs))
    }

    /// Compares against another monetary value.
    ///
    /// The comparison operators (`<`, `<=`, ...) only order values of the
    /// same currency; this is the policy-aware form, so under the
    /// converting policy `other` is converted before comparing.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        let rhs = self.reconciled(other, Op::Cmp)?;
        Ok(self.amount.cmp(&rhs))
    }

    // ========== Scalar Operations ==========

    /// Adds a bare amount, keeping the currency.
    #[must_use]
    pub fn add_amount(&self, amount: impl Into<Decimal>) -> Self {
        Self::new(self.amount + amount.into(), self.currency)
    }

    /// Subtracts a bare amount, keeping the currency.
    #[must_use]
    pub fn sub_amount(&self, amount: impl Into<Decimal>) -> Self {
        Self::new(self.amount - amount.into(), self.currency)
    }

    /// Scales the amount by a dimensionless factor.
    #[must_use]
    pub fn mul_amount(&self, factor: impl Into<Decimal>) -> Self {
        Self::new(self.amount * factor.into(), self.currency)
    }

    /// Divides the amount by a scalar divisor.
    pub fn try_div_amount(&self, divisor: impl Into<Decimal>) -> MoneyResult<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor, self.currency))
    }

    /// Divides the amount by a scalar divisor, truncating toward zero.
    pub fn try_floordiv_amount(&self, divisor: impl Into<Decimal>) -> MoneyResult<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new((self.amount / divisor).trunc(), self.currency))
    }

    /// Remainder of the amount against a scalar divisor.
    ///
    /// The sign follows the dividend.
    pub fn try_rem_amount(&self, divisor: impl Into<Decimal>) -> MoneyResult<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount % divisor, self.currency))
    }

    /// Quotient and remainder against a scalar divisor.
    ///
    /// Both halves keep the currency.
    pub fn try_divmod_amount(&self, divisor: impl Into<Decimal>) -> MoneyResult<(Self, Self)> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = (self.amount / divisor).trunc();
        let remainder = self.amount - quotient * divisor;
        Ok((
            Self::new(quotient, self.currency),
            Self::new(remainder, self.currency),
        ))
    }

    /// Raises the amount to an integer power.
    ///
    /// Fails with [`MoneyError::DivisionByZero`] when a negative exponent
    /// meets a zero amount, and with [`MoneyError::Overflow`] when the
    /// result does not fit a `Decimal`.
    pub fn try_pow_amount(&self, exponent: i32) -> MoneyResult<Self> {
        if exponent >= 0 {
            let raised = self
                .amount
                .checked_powi(i64::from(exponent))
                .ok_or(MoneyError::Overflow)?;
            return Ok(Self::new(raised, self.currency));
        }
        if self.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let raised = self
            .amount
            .checked_powi(i64::from(exponent.unsigned_abs()))
            .ok_or(MoneyError::Overflow)?;
        let inverse = Decimal::ONE
            .checked_div(raised)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(inverse, self.currency))
    }

    // ========== Unary Operations ==========

    /// The absolute value, keeping the currency.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency)
    }

    /// Rounds to a whole number of units, half to even.
    #[must_use]
    pub fn round(&self) -> Self {
        self.round_dp(0)
    }

    /// Rounds to `decimal_places`, half to even (banker's rounding).
    #[must_use]
    pub fn round_dp(&self, decimal_places: u32) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven),
            self.currency,
        )
    }

    /// Truncates to a whole number of currency units.
    ///
    /// Lossy: the fractional part is dropped. `None` when the amount does
    /// not fit an `i64`.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.amount.trunc().to_i64()
    }

    /// Approximates the amount as a float.
    ///
    /// Lossy: binary floating point cannot represent most decimal
    /// fractions exactly.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.amount.to_f64()
    }

    // ========== Currency Conversion ==========

    /// Re-expresses this value in `target` using the given registry.
    ///
    /// Converting to the current currency returns the value unchanged
    /// without touching the registry. Otherwise the amount is multiplied by
    /// the registry's quotation from the current currency to `target`;
    /// a backend with no data for the pair fails with
    /// [`ExchangeError::RateNotFound`].
    pub fn convert_in(&self, target: Currency, registry: &Registry) -> MoneyResult<Self> {
        if target == self.currency {
            return Ok(*self);
        }
        let (backend, quotation) = registry
            .with_backend(|backend| (backend.name(), backend.quotation(self.currency, target)))?;
        let Some(rate) = quotation else {
            return Err(ExchangeError::RateNotFound {
                backend,
                from: self.currency,
                to: target,
            }
            .into());
        };
        debug!(from = %self.currency, to = %target, %rate, "currency converted");
        Ok(Self::new(self.amount * rate, target))
    }

    /// Re-expresses this value in `target` via the process-wide registry.
    pub fn to(&self, target: Currency) -> MoneyResult<Self> {
        self.convert_in(target, xrates())
    }
}

impl<P: CurrencyPolicy> fmt::Display for Money<P> {
    /// Canonical form: `"CCY amount"`, full precision, no grouping.
    ///
    /// This is the round-trip representation consumed by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

impl<P: CurrencyPolicy> FromStr for Money<P> {
    type Err = MoneyError;

    /// Parses the canonical `"CCY amount"` form.
    ///
    /// Exactly two whitespace-separated tokens, currency first. The
    /// human-facing grouped rendering is not parseable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(currency), Some(amount), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(MoneyError::Parse {
                input: s.to_string(),
                reason: "expected two tokens: currency then amount".to_string(),
            });
        };
        Self::from_parts(amount, currency).map_err(|cause| MoneyError::Parse {
            input: s.to_string(),
            reason: cause.to_string(),
        })
    }
}
