//! Conversion engine over an injected rate table.
//!
//! Pure and deterministic: the same table and inputs always give the same
//! result, and nothing is cached between calls. The caller decides when to
//! recompute.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::amount::{
    AMOUNT_DECIMAL_PLACES, RATE_DECIMAL_PLACES, checked_round_fixed, parse_amount,
};
use super::code::CurrencyCode;
use super::error::ConversionError;
use super::rates::RateTable;
use super::state::ConverterState;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Converted amount, rounded to 2 decimal places.
    pub converted_amount: Decimal,
    /// `converted_amount / amount`, rounded to 4 decimal places.
    /// `None` when the amount is zero.
    pub effective_rate: Option<Decimal>,
}

/// Converts amounts between currencies using a fixed rate table.
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    rates: RateTable,
}

impl ConversionEngine {
    /// Creates an engine over `rates`.
    #[must_use]
    pub const fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Creates an engine over [`RateTable::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RateTable::standard())
    }

    /// Returns the rate table this engine converts with.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Converts a user-entered amount from `from` to `to`.
    ///
    /// Returns `Ok(None)` when the amount is empty, not a valid number, or too
    /// large to convert (nothing to display). Fails only when a code is
    /// missing from the table.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use convertly_core::currency::{ConversionEngine, CurrencyCode};
    ///
    /// let engine = ConversionEngine::standard();
    /// let result = engine
    ///     .convert("100", CurrencyCode::Usd, CurrencyCode::Eur)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(result.converted_amount, dec!(85.00));
    /// assert_eq!(result.effective_rate, Some(dec!(0.8500)));
    /// ```
    pub fn convert(
        &self,
        amount: &str,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Option<ConversionResult>, ConversionError> {
        self.ensure_supported(from)?;
        self.ensure_supported(to)?;

        let Some(amount) = parse_amount(amount) else {
            return Ok(None);
        };

        let converted_amount = match self.convert_amount(amount, from, to) {
            Ok(converted_amount) => converted_amount,
            Err(ConversionError::AmountOutOfRange(_)) => {
                debug!(%from, %to, %amount, "Amount out of range for conversion");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let effective_rate = rate_between(amount, converted_amount);

        debug!(
            %from,
            %to,
            %amount,
            %converted_amount,
            "Converted amount"
        );

        Ok(Some(ConversionResult {
            converted_amount,
            effective_rate,
        }))
    }

    /// Converts an already-parsed amount: `(amount / rate[from]) * rate[to]`,
    /// rounded to 2 decimal places.
    ///
    /// Fails with [`ConversionError::AmountOutOfRange`] when the result does not
    /// fit in a `Decimal` with 2 decimal places.
    pub fn convert_amount(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Decimal, ConversionError> {
        let from_rate = self.rates.rate(from)?;
        let to_rate = self.rates.rate(to)?;

        let converted = if from == to {
            Some(amount)
        } else {
            amount
                .checked_div(from_rate)
                .and_then(|base| base.checked_mul(to_rate))
        };

        converted
            .and_then(|converted| checked_round_fixed(converted, AMOUNT_DECIMAL_PLACES))
            .ok_or(ConversionError::AmountOutOfRange(amount))
    }

    /// Effective display rate between an amount and its converted amount.
    ///
    /// Returns `None` if either side is empty or not a number, or if the
    /// amount is zero.
    #[must_use]
    pub fn effective_rate(amount: &str, converted_amount: &str) -> Option<Decimal> {
        rate_between(parse_amount(amount)?, parse_amount(converted_amount)?)
    }

    /// Exchanges both currencies and both amounts in one step.
    #[must_use]
    pub fn swap(state: ConverterState) -> ConverterState {
        state.swapped()
    }

    fn ensure_supported(&self, code: CurrencyCode) -> Result<(), ConversionError> {
        if self.rates.contains(code) {
            Ok(())
        } else {
            warn!(%code, "Conversion requested for currency missing from rate table");
            Err(ConversionError::InvalidCurrency(code.to_string()))
        }
    }
}

fn rate_between(amount: Decimal, converted_amount: Decimal) -> Option<Decimal> {
    if amount.is_zero() {
        return None;
    }
    converted_amount
        .checked_div(amount)
        .and_then(|rate| checked_round_fixed(rate, RATE_DECIMAL_PLACES))
}
