//! Number formatting for human-readable narratives.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_SYMBOL;

/// Formats a money amount as whole currency units grouped with `.`
/// separators, e.g. `1.730.000đ`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let value = rounded.to_i128().unwrap_or_default();
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}{}", sign, grouped, CURRENCY_SYMBOL)
}

/// Formats a unit quantity without trailing zeros, e.g. `1.5`.
pub fn format_units(units: Decimal) -> String {
    units.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(270000)), "270.000đ");
        assert_eq!(format_amount(dec!(1730000)), "1.730.000đ");
        assert_eq!(format_amount(dec!(999)), "999đ");
        assert_eq!(format_amount(dec!(0)), "0đ");
    }

    #[test]
    fn test_format_amount_rounds_to_whole_units() {
        assert_eq!(format_amount(dec!(1499.5)), "1.500đ");
        assert_eq!(format_amount(dec!(-2500.4)), "-2.500đ");
    }

    #[test]
    fn test_format_units_drops_trailing_zeros() {
        assert_eq!(format_units(dec!(1.50)), "1.5");
        assert_eq!(format_units(dec!(2.0)), "2");
        assert_eq!(format_units(dec!(0.5)), "0.5");
    }
}
