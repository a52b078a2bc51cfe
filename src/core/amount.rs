//! Parsing, rounding and display formatting of monetary amounts.
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a user supplied amount, ignoring thousands-separator commas.
///
/// Returns `None` for anything that is not a finite number, so `"1,000.5"`
/// parses while `"abc"`, `""` and `"inf"` do not.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Rounds `value` to `dp` decimal places, ties away from zero.
///
/// The value is taken through `Decimal` so the tie is decided on its decimal
/// form (`0.125` becomes `0.13`, `-0.125` becomes `-0.13`). Values that do not
/// fit a `Decimal` are returned untouched; at that magnitude an `f64` has no
/// fractional digits left to round.
pub fn round_to(value: f64, dp: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Formats `value` with two decimals and a comma between every group of
/// three integer digits.
///
/// The sign goes in front of the grouped digits (`-1,234.50`). A value that
/// shows as zero is printed without a sign.
pub fn format_with_commas(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}
