//! Display formatting for amounts and percentages.
//!
//! Amounts render as two-decimal USD with thousands separators
//! (`$125,430.50`, `-$5,420.15`); percentages render with an explicit
//! leading sign and two decimals (`+11.14%`, `-10.69%`). Rounding is
//! half-away-from-zero at two decimal places, matching common locale
//! formatters.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats an amount as a localized USD currency string.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let (units, cents) = split_fixed2(rounded.abs());
    format!("{}${}.{:02}", sign, group_thousands(units), cents)
}

/// Formats a percentage with an explicit leading sign and two decimals.
///
/// Zero and positive values carry a `+`; negative values a `-`.
pub fn format_signed_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        "+"
    };
    let (units, cents) = split_fixed2(rounded.abs());
    format!("{}{}.{:02}%", sign, units, cents)
}

/// Splits a non-negative two-decimal value into whole units and cents.
fn split_fixed2(value: Decimal) -> (u128, u32) {
    let units = value.trunc();
    let cents = ((value - units) * dec!(100)).normalize();
    (
        units.to_u128().unwrap_or(u128::MAX),
        cents.to_u32().unwrap_or(0),
    )
}

/// Inserts comma separators every three digits.
fn group_thousands(units: u128) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(125430.50)), "$125,430.50");
        assert_eq!(format_currency(dec!(8765)), "$8,765.00");
        assert_eq!(format_currency(dec!(0.72)), "$0.72");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-5420.15)), "-$5,420.15");
        assert_eq!(format_currency(dec!(-0.004)), "$0.00");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(dec!(11.14)), "+11.14%");
        assert_eq!(format_signed_percent(dec!(-10.69)), "-10.69%");
        assert_eq!(format_signed_percent(dec!(0)), "+0.00%");
        assert_eq!(format_signed_percent(dec!(2.1)), "+2.10%");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_signed_percent(dec!(16.8667)), "+16.87%");
        assert_eq!(format_signed_percent(dec!(1.005)), "+1.01%");
        assert_eq!(format_currency(dec!(2.675)), "$2.68");
    }
}
