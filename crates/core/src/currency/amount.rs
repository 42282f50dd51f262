//! Parsing and display of user-entered amounts.
//!
//! Rounding strategy:
//! - Converted amounts: 2 decimal places
//! - Effective rates: 4 decimal places
//! - Midpoints round away from zero (0.125 -> 0.13)

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for a converted amount.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Decimal places shown for an effective rate.
pub const RATE_DECIMAL_PLACES: u32 = 4;

/// Parses a user-entered amount.
///
/// Returns `None` for empty input, anything that is not a finite number, and
/// negative numbers. Accepts plain (`12.50`) and scientific (`1e3`) notation.
#[must_use]
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(is_number_char) {
        return None;
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;

    if value < Decimal::ZERO {
        return None;
    }
    Some(value.normalize())
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// Rounds to `decimal_places`, midpoints away from zero, and pads the scale so
/// the value always displays with exactly that many decimals.
///
/// Near the top of the `Decimal` range the padding cannot be applied and the
/// result keeps a smaller scale; use [`checked_round_fixed`] to reject those.
#[must_use]
pub fn round_fixed(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded
}

/// Like [`round_fixed`], but `None` when the value is too large to carry
/// exactly `decimal_places` decimals.
#[must_use]
pub fn checked_round_fixed(value: Decimal, decimal_places: u32) -> Option<Decimal> {
    let rounded = round_fixed(value, decimal_places);
    (rounded.scale() == decimal_places).then_some(rounded)
}

/// Renders a converted amount with exactly two decimals (`85.00`).
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    round_fixed(value, AMOUNT_DECIMAL_PLACES).to_string()
}

/// Renders an effective rate with exactly four decimals (`0.8500`).
#[must_use]
pub fn format_rate(value: Decimal) -> String {
    round_fixed(value, RATE_DECIMAL_PLACES).to_string()
}
