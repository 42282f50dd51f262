//! Converter form state as seen by a presentation layer.

use serde::{Deserialize, Serialize};

use super::amount::{format_amount, format_rate};
use super::code::CurrencyCode;
use super::engine::ConversionEngine;
use super::error::ConversionError;

/// The two sides of the converter form.
///
/// Amounts are kept as the strings the user typed or the engine rendered, so
/// that a swap moves exactly what was on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterState {
    /// Source currency.
    pub from: CurrencyCode,
    /// Target currency.
    pub to: CurrencyCode,
    /// Amount as entered.
    #[serde(default)]
    pub amount: String,
    /// Converted amount as displayed (`""` when there is nothing to show).
    #[serde(default)]
    pub converted_amount: String,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(CurrencyCode::Usd, CurrencyCode::Eur)
    }
}

impl ConverterState {
    /// Creates an empty form for the given pair.
    #[must_use]
    pub const fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self {
            from,
            to,
            amount: String::new(),
            converted_amount: String::new(),
        }
    }

    /// Recomputes the converted amount from the current amount and pair.
    pub fn recompute(mut self, engine: &ConversionEngine) -> Result<Self, ConversionError> {
        self.converted_amount = engine
            .convert(&self.amount, self.from, self.to)?
            .map(|result| format_amount(result.converted_amount))
            .unwrap_or_default();
        Ok(self)
    }

    /// Sets the amount and recomputes.
    pub fn with_amount(
        mut self,
        amount: impl Into<String>,
        engine: &ConversionEngine,
    ) -> Result<Self, ConversionError> {
        self.amount = amount.into();
        self.recompute(engine)
    }

    /// Sets the source currency and recomputes.
    pub fn with_from(
        mut self,
        from: CurrencyCode,
        engine: &ConversionEngine,
    ) -> Result<Self, ConversionError> {
        self.from = from;
        self.recompute(engine)
    }

    /// Sets the target currency and recomputes.
    pub fn with_to(
        mut self,
        to: CurrencyCode,
        engine: &ConversionEngine,
    ) -> Result<Self, ConversionError> {
        self.to = to;
        self.recompute(engine)
    }

    /// Swaps currencies and amounts together.
    ///
    /// The converted amount becomes the new input amount as-is; no
    /// recomputation happens.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            amount: self.converted_amount,
            converted_amount: self.amount,
        }
    }

    /// Rate caption such as `"1 USD = 0.8500 EUR"`.
    ///
    /// `None` when there is no effective rate to show (empty, invalid or zero
    /// amount).
    #[must_use]
    pub fn rate_line(&self) -> Option<String> {
        ConversionEngine::effective_rate(&self.amount, &self.converted_amount)
            .map(|rate| format!("1 {} = {} {}", self.from, format_rate(rate), self.to))
    }
}
