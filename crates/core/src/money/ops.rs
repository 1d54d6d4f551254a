//! Operator sugar over the named operations.
//!
//! Binary operators between monetary values are fallible, so their
//! `Output` is [`MoneyResult`]. The named `try_*` methods on [`Money`]
//! are the canonical forms; the impls here only forward.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use rust_decimal::Decimal;

use super::policy::CurrencyPolicy;
use super::value::{Money, MoneyResult};

// ========== Money-With-Money Operators ==========

impl<P: CurrencyPolicy> Add for Money<P> {
    type Output = MoneyResult<Self>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<P: CurrencyPolicy> Sub for Money<P> {
    type Output = MoneyResult<Self>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<P: CurrencyPolicy> Div for Money<P> {
    type Output = MoneyResult<Decimal>;

    /// Money divided by money cancels the unit.
    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(&rhs)
    }
}

// ========== Scalar Operators ==========

impl<P: CurrencyPolicy> Add<Decimal> for Money<P> {
    type Output = Self;

    fn add(self, rhs: Decimal) -> Self {
        self.add_amount(rhs)
    }
}

impl<P: CurrencyPolicy> Sub<Decimal> for Money<P> {
    type Output = Self;

    fn sub(self, rhs: Decimal) -> Self {
        self.sub_amount(rhs)
    }
}

impl<P: CurrencyPolicy> Mul<Decimal> for Money<P> {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        self.mul_amount(rhs)
    }
}

impl<P: CurrencyPolicy> Mul<Money<P>> for Decimal {
    type Output = Money<P>;

    fn mul(self, rhs: Money<P>) -> Money<P> {
        rhs.mul_amount(self)
    }
}

impl<P: CurrencyPolicy> Div<Decimal> for Money<P> {
    type Output = MoneyResult<Self>;

    fn div(self, rhs: Decimal) -> Self::Output {
        self.try_div_amount(rhs)
    }
}

impl<P: CurrencyPolicy> Rem<Decimal> for Money<P> {
    type Output = MoneyResult<Self>;

    fn rem(self, rhs: Decimal) -> Self::Output {
        self.try_rem_amount(rhs)
    }
}

// ========== Unary And Ordering ==========

impl<P: CurrencyPolicy> Neg for Money<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount(), self.currency())
    }
}

// No Ord impl: values in different currencies have no defined order.
impl<P: CurrencyPolicy> PartialOrd for Money<P> {
    /// Same-currency ordering only; mismatched currencies are unordered.
    ///
    /// Use [`Money::try_cmp`] for the policy-aware comparison.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency() == other.currency() {
            Some(self.amount().cmp(&other.amount()))
        } else {
            None
        }
    }
}
