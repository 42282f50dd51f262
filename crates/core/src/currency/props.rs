//! Property-based tests for the conversion engine.
//!
//! - Identity: converting to the same currency only rounds
//! - Round trip: converting there and back lands within rounding tolerance
//! - Output scale: converted amounts always carry 2 decimal places
//! - Swap: applying it twice restores the original state

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::amount::round_fixed;
use super::code::CurrencyCode;
use super::engine::ConversionEngine;
use super::state::ConverterState;

/// Strategy to generate non-negative amounts (0.00 to 10,000,000.00).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive amounts with up to 4 decimals.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn any_currency() -> impl Strategy<Value = CurrencyCode> {
    prop::sample::select(CurrencyCode::ALL.to_vec())
}

fn any_state() -> impl Strategy<Value = ConverterState> {
    (any_currency(), any_currency(), ".{0,12}", ".{0,12}").prop_map(
        |(from, to, amount, converted_amount)| ConverterState {
            from,
            to,
            amount,
            converted_amount,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and code c, convert(amount, c, c) SHALL equal the
    /// amount rounded to 2 decimals.
    #[test]
    fn prop_same_currency_preserves_amount(
        amount in positive_amount(),
        code in any_currency(),
    ) {
        let engine = ConversionEngine::standard();
        let result = engine.convert(&amount.to_string(), code, code).unwrap().unwrap();
        prop_assert_eq!(result.converted_amount, round_fixed(amount, 2));
    }

    /// *For any* amount and pair (x, y), converting back from y to x SHALL
    /// land within the compounded rounding error of the original.
    #[test]
    fn prop_round_trip_within_rounding_tolerance(
        amount in any_amount(),
        from in any_currency(),
        to in any_currency(),
    ) {
        let engine = ConversionEngine::standard();
        let there = engine.convert_amount(amount, from, to).unwrap();
        let back = engine.convert_amount(there, to, from).unwrap();

        // |there - a*r| <= 0.005, so |back - a| <= 0.005 / r + 0.005
        let pair_rate = engine.rates().pair_rate(from, to).unwrap();
        let tolerance = dec!(0.005) / pair_rate + dec!(0.005) + dec!(0.000001);
        prop_assert!(
            (back - amount).abs() <= tolerance,
            "{} {} -> {} {} -> {} {} exceeds tolerance {}",
            amount, from, there, to, back, from, tolerance
        );
    }

    /// *For any* valid amount, the converted amount SHALL have exactly 2
    /// decimal places.
    #[test]
    fn prop_converted_amount_has_two_decimals(
        amount in positive_amount(),
        from in any_currency(),
        to in any_currency(),
    ) {
        let engine = ConversionEngine::standard();
        let result = engine.convert(&amount.to_string(), from, to).unwrap().unwrap();
        prop_assert_eq!(result.converted_amount.scale(), 2);
        prop_assert!(result.converted_amount >= Decimal::ZERO);
    }

    /// *For any* alphabetic input, convert SHALL return no result.
    #[test]
    fn prop_alphabetic_amount_has_no_result(
        amount in "[a-zA-Z]{1,10}",
        from in any_currency(),
        to in any_currency(),
    ) {
        let engine = ConversionEngine::standard();
        prop_assert_eq!(engine.convert(&amount, from, to), Ok(None));
    }

    /// *For any* state, swap(swap(state)) SHALL equal state.
    #[test]
    fn prop_swap_is_self_inverse(state in any_state()) {
        let twice = ConversionEngine::swap(ConversionEngine::swap(state.clone()));
        prop_assert_eq!(twice, state);
    }

    /// *For any* state, a single swap SHALL move both pairs together.
    #[test]
    fn prop_swap_moves_codes_and_amounts_together(state in any_state()) {
        let swapped = ConversionEngine::swap(state.clone());
        prop_assert_eq!(swapped.from, state.to);
        prop_assert_eq!(swapped.to, state.from);
        prop_assert_eq!(swapped.amount, state.converted_amount);
        prop_assert_eq!(swapped.converted_amount, state.amount);
    }

    /// *For any* converted value, a zero amount SHALL yield no effective rate.
    #[test]
    fn prop_zero_amount_has_no_effective_rate(converted in any_amount()) {
        prop_assert_eq!(ConversionEngine::effective_rate("0", &converted.to_string()), None);
    }
}
