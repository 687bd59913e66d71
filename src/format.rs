//! Formatting of amounts and dates for the view models.

use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The config that controls how amounts are rendered in view models.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// The currency symbol prefixed to formatted amounts.
    pub currency_symbol: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_owned(),
        }
    }
}

const SHORT_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day]/[month]/[year repr:last_two]");

/// Render `date` as a short `DD/MM/YY` string.
pub fn short_date(date: Date) -> String {
    date.format(SHORT_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Render `amount` as a currency string with thousands separators and two
/// decimal places, e.g. `€1,234.50`.
///
/// Arithmetic stays in [Decimal] everywhere; the conversion to `f64` here is
/// display-only.
pub fn currency(amount: Decimal, config: &FormatConfig) -> String {
    let symbol = config.currency_symbol.as_str();

    if amount.is_zero() {
        // Zero is hardcoded as "0" by numfmt, so we must specify the
        // formatted string for zero ourselves.
        return format!("{symbol}0.00");
    }

    let prefix = if amount < Decimal::ZERO {
        format!("-{symbol}")
    } else {
        symbol.to_owned()
    };

    let fmt = Formatter::currency(&prefix)
        .unwrap()
        .precision(Precision::Decimals(2));

    let mut formatted = fmt.fmt_string(amount.abs().to_f64().unwrap_or_default());

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

#[cfg(test)]
mod format_tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use super::{FormatConfig, currency, short_date};

    #[test]
    fn currency_renders_two_decimal_places() {
        let config = FormatConfig::default();

        assert_eq!(currency(dec!(50), &config), "€50.00");
        assert_eq!(currency(dec!(12.30), &config), "€12.30");
        assert_eq!(currency(dec!(9.99), &config), "€9.99");
    }

    #[test]
    fn currency_renders_thousands_separators() {
        let config = FormatConfig::default();

        assert_eq!(currency(dec!(1234.5), &config), "€1,234.50");
    }

    #[test]
    fn currency_renders_zero() {
        let config = FormatConfig::default();

        assert_eq!(currency(dec!(0), &config), "€0.00");
    }

    #[test]
    fn currency_prefixes_negative_amounts_with_a_minus() {
        let config = FormatConfig::default();

        assert_eq!(currency(dec!(-12.3), &config), "-€12.30");
    }

    #[test]
    fn currency_respects_the_configured_symbol() {
        let config = FormatConfig {
            currency_symbol: "$".to_owned(),
        };

        assert_eq!(currency(dec!(100), &config), "$100.00");
    }

    #[test]
    fn short_date_renders_day_month_two_digit_year() {
        assert_eq!(short_date(date!(2024 - 01 - 05)), "05/01/24");
    }
}
