//! Human-facing renderings.
//!
//! The [`Display`](std::fmt::Display) impl on [`Money`] is the canonical,
//! machine-parseable form. This module adds the presentation forms:
//! a grouped rendering for prose and logs, and [`LocaleFormatter`] as the
//! seam for callers that bring their own locale data.

use rust_decimal::Decimal;

use super::currency::Currency;
use super::policy::CurrencyPolicy;
use super::value::Money;

/// Locale-aware rendering, supplied by the caller.
///
/// The crate ships no locale tables. Implement this on whatever wraps
/// them (a CLDR binding, a fixed house style) and pass it to
/// [`Money::format_with`].
pub trait LocaleFormatter {
    /// Renders an amount of a currency.
    ///
    /// `locale` and `pattern` are passed through from the call site;
    /// `None` means the implementation's default.
    fn format(
        &self,
        amount: Decimal,
        currency: Currency,
        locale: Option<&str>,
        pattern: Option<&str>,
    ) -> String;
}

impl<P: CurrencyPolicy> Money<P> {
    /// Renders through a locale-aware formatter.
    pub fn format_with<F: LocaleFormatter>(
        &self,
        formatter: &F,
        locale: Option<&str>,
        pattern: Option<&str>,
    ) -> String {
        formatter.format(self.amount(), self.currency(), locale, pattern)
    }

    /// Renders as `"CCY 1,234.57"`: two decimal places, half to even,
    /// thousands separated by commas.
    ///
    /// Presentation only; [`FromStr`](std::str::FromStr) does not accept
    /// this form.
    #[must_use]
    pub fn format_grouped(&self) -> String {
        let rounded = self.round_dp(2);
        format!("{} {}", self.currency(), group_thousands(rounded.amount()))
    }
}

/// Renders a pre-rounded amount with comma groups and two decimals.
fn group_thousands(amount: Decimal) -> String {
    // Scale is at most 2 here, so `:.2` only pads zeros.
    let text = format!("{amount:.2}");
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}
