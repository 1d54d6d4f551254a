//! Property-based tests for rate backends and quotation derivation.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::backend::ExchangeBackend;
use super::simple::SimpleBackend;
use crate::money::Currency;

fn ccy(code: &str) -> Currency {
    Currency::new(code).unwrap()
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy over non-base currency codes.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec!["AAA", "BBB", "CCC", "EUR", "USD"]).prop_map(ccy)
}

fn backend_with(currency: Currency, rate: Decimal) -> SimpleBackend {
    let mut backend = SimpleBackend::new();
    backend.set_base(ccy("XXX"));
    backend.set_rate(currency, rate).unwrap();
    backend
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The base currency rates at exactly 1 whatever the table holds.
    #[test]
    fn prop_base_rate_is_one(currency in currency(), rate in positive_rate()) {
        let backend = backend_with(currency, rate);
        prop_assert_eq!(backend.rate(ccy("XXX")), Some(Decimal::ONE));
    }

    /// Quotation from the base collapses to the plain rate.
    #[test]
    fn prop_quotation_from_base_is_rate(currency in currency(), rate in positive_rate()) {
        let backend = backend_with(currency, rate);
        prop_assert_eq!(backend.quotation(ccy("XXX"), currency), Some(rate));
    }

    /// Quotation of a currency against itself is exactly 1.
    #[test]
    fn prop_quotation_self_is_one(currency in currency(), rate in positive_rate()) {
        let backend = backend_with(currency, rate);
        prop_assert_eq!(backend.quotation(currency, currency), Some(Decimal::ONE));
    }

    /// Unknown currencies yield no quotation in either direction.
    #[test]
    fn prop_unknown_currency_is_none(currency in currency(), rate in positive_rate()) {
        let backend = backend_with(currency, rate);
        prop_assert_eq!(backend.rate(ccy("QQQ")), None);
        prop_assert_eq!(backend.quotation(ccy("QQQ"), currency), None);
        prop_assert_eq!(backend.quotation(currency, ccy("QQQ")), None);
    }

    /// A zero rate blocks quotation in both directions.
    #[test]
    fn prop_zero_rate_blocks_quotation(currency in currency()) {
        let backend = backend_with(currency, Decimal::ZERO);
        prop_assert_eq!(backend.quotation(currency, ccy("XXX")), None);
        prop_assert_eq!(backend.quotation(ccy("XXX"), currency), None);
    }
}

mod cases {
    use super::*;

    fn two_rate_backend() -> SimpleBackend {
        let mut backend = SimpleBackend::new();
        backend.set_base(ccy("XXX"));
        backend.set_rate(ccy("AAA"), dec!(2)).unwrap();
        backend.set_rate(ccy("BBB"), dec!(8)).unwrap();
        backend
    }

    /// Quotations derived through the base for a fixed two-rate table.
    #[rstest]
    #[case("AAA", "BBB", dec!(4))]
    #[case("BBB", "AAA", dec!(0.25))]
    #[case("XXX", "AAA", dec!(2))]
    #[case("AAA", "XXX", dec!(0.5))]
    #[case("XXX", "BBB", dec!(8))]
    #[case("BBB", "XXX", dec!(0.125))]
    #[case("XXX", "XXX", dec!(1))]
    #[case("AAA", "AAA", dec!(1))]
    fn test_quotation_table(#[case] from: &str, #[case] to: &str, #[case] expected: Decimal) {
        let backend = two_rate_backend();
        assert_eq!(backend.quotation(ccy(from), ccy(to)), Some(expected));
    }
}
