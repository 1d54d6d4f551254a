//! Property-based tests for monetary arithmetic and text forms.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::exchange::{Registry, SimpleBackend};

use super::error::MoneyError;
use super::{Currency, Money};

fn ccy(code: &str) -> Currency {
    Currency::new(code).unwrap()
}

/// Strategy to generate amounts in cents, both signs (-1M to 1M units).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy over amounts across scales 0 to 6.
fn scaled_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..=6u32)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec!["USD", "EUR", "IDR", "JPY", "XXX"]).prop_map(ccy)
}

fn currency_pair() -> impl Strategy<Value = (Currency, Currency)> {
    (currency(), currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy over rates whose quotients are exact decimals (1 to 128).
fn power_of_two_rate() -> impl Strategy<Value = Decimal> {
    (0u32..8u32).prop_map(|exponent| Decimal::from(1u64 << exponent))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The canonical text form survives a parse round trip.
    #[test]
    fn prop_canonical_round_trip(amount in scaled_amount(), currency in currency()) {
        let money: Money = Money::new(amount, currency);
        let parsed: Money = money.to_string().parse().unwrap();
        prop_assert_eq!(parsed, money);
    }

    /// Addition commutes within a currency.
    #[test]
    fn prop_add_commutative_same_currency(a in amount(), b in amount(), currency in currency()) {
        let lhs: Money = Money::new(a, currency);
        let rhs: Money = Money::new(b, currency);
        prop_assert_eq!(lhs.try_add(&rhs).unwrap(), rhs.try_add(&lhs).unwrap());
    }

    /// Adding then subtracting the same value is the identity.
    #[test]
    fn prop_add_sub_round_trip(a in amount(), b in amount(), currency in currency()) {
        let lhs: Money = Money::new(a, currency);
        let rhs: Money = Money::new(b, currency);
        let back = lhs.try_add(&rhs).unwrap().try_sub(&rhs).unwrap();
        prop_assert_eq!(back, lhs);
    }

    /// Negation is an involution.
    #[test]
    fn prop_neg_involution(a in scaled_amount(), currency in currency()) {
        let money: Money = Money::new(a, currency);
        prop_assert_eq!(-(-money), money);
    }

    /// Absolute values are never negative.
    #[test]
    fn prop_abs_never_negative(a in scaled_amount(), currency in currency()) {
        let money: Money = Money::new(a, currency);
        prop_assert!(!money.abs().is_negative());
    }

    /// Rounding twice to the same precision changes nothing.
    #[test]
    fn prop_round_idempotent(a in scaled_amount(), currency in currency()) {
        let once: Money = Money::new(a, currency).round_dp(2);
        prop_assert_eq!(once.round_dp(2), once);
    }

    /// Mixing currencies under the strict policy always fails.
    #[test]
    fn prop_mismatched_add_rejected(a in amount(), b in amount(), (lhs, rhs) in currency_pair()) {
        let result = Money::<super::Strict>::new(a, lhs).try_add(&Money::new(b, rhs));
        prop_assert!(
            matches!(&result, Err(MoneyError::CurrencyMismatch { .. })),
            "expected a currency mismatch, got {result:?}"
        );
    }

    /// Scaling distributes over addition.
    #[test]
    fn prop_scalar_mul_distributes_over_add(
        a in amount(),
        b in amount(),
        k in -1_000i64..1_000i64,
        currency in currency(),
    ) {
        let factor = Decimal::from(k);
        let lhs: Money = Money::new(a, currency);
        let rhs: Money = Money::new(b, currency);
        let scaled_sum = lhs.try_add(&rhs).unwrap().mul_amount(factor);
        let sum_of_scaled = lhs.mul_amount(factor).try_add(&rhs.mul_amount(factor)).unwrap();
        prop_assert_eq!(scaled_sum, sum_of_scaled);
    }

    /// Converting there and back is exact when the quotients are.
    #[test]
    fn prop_convert_round_trip(
        a in amount(),
        rate_a in power_of_two_rate(),
        rate_b in power_of_two_rate(),
    ) {
        let registry = Registry::new();
        let mut backend = SimpleBackend::new();
        backend.set_base(ccy("XXX"));
        backend.set_rate(ccy("AAA"), rate_a).unwrap();
        backend.set_rate(ccy("BBB"), rate_b).unwrap();
        registry.install(backend);

        let money: Money = Money::new(a, ccy("AAA"));
        let round_tripped = money
            .convert_in(ccy("BBB"), &registry)
            .unwrap()
            .convert_in(ccy("AAA"), &registry)
            .unwrap();
        prop_assert_eq!(round_tripped, money);
    }

    /// Scalar divmod yields an integral quotient that reconstructs the
    /// dividend, with the remainder below the divisor in magnitude.
    #[test]
    fn prop_divmod_amount_reconstructs(
        a in amount(),
        d in (1i64..10_000i64).prop_map(Decimal::from),
        currency in currency(),
    ) {
        let money: Money = Money::new(a, currency);
        let (quotient, remainder) = money.try_divmod_amount(d).unwrap();
        prop_assert!(quotient.amount().fract().is_zero());
        prop_assert_eq!(quotient.amount() * d + remainder.amount(), money.amount());
        prop_assert!(remainder.amount().abs() < d);
        prop_assert!(
            remainder.is_zero() || remainder.is_negative() == money.is_negative()
        );
    }
}

mod cases {
    use super::*;
    use rstest::rstest;

    /// Rounding to whole units goes half to even.
    #[rstest]
    #[case(dec!(1.50), dec!(2))]
    #[case(dec!(2.50), dec!(2))]
    #[case(dec!(0.50), dec!(0))]
    #[case(dec!(-1.49), dec!(-1))]
    #[case(dec!(-2.50), dec!(-2))]
    fn test_round_half_to_even(#[case] amount: Decimal, #[case] expected: Decimal) {
        let money: Money = Money::new(amount, ccy("XXX"));
        assert_eq!(money.round().amount(), expected);
    }

    /// Rounding to a precision goes half to even at that digit.
    #[rstest]
    #[case(dec!(1.234), 2, dec!(1.23))]
    #[case(dec!(1.235), 2, dec!(1.24))]
    #[case(dec!(2.25), 1, dec!(2.2))]
    #[case(dec!(2.35), 1, dec!(2.4))]
    fn test_round_dp_half_to_even(
        #[case] amount: Decimal,
        #[case] decimal_places: u32,
        #[case] expected: Decimal,
    ) {
        let money: Money = Money::new(amount, ccy("XXX"));
        assert_eq!(money.round_dp(decimal_places).amount(), expected);
    }

    /// Anything but two tokens in currency-first order is rejected.
    #[rstest]
    #[case("")]
    #[case("EUR")]
    #[case("2.22")]
    #[case("2.22 EUR")]
    #[case("EUR 2.22 extra")]
    #[case("EUR twenty")]
    fn test_parse_rejects(#[case] input: &str) {
        assert!(matches!(input.parse::<Money>(), Err(MoneyError::Parse { .. })));
    }
}
