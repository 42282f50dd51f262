//! Immutable base-relative rate table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::code::CurrencyCode;
use super::error::ConversionError;

/// Mapping from currency code to "units of this currency per one unit of
/// the base currency".
///
/// Built once and never mutated; injected into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Builds a custom table.
    ///
    /// Every rate must be positive and the base currency must be present with
    /// a rate of exactly 1. Codes may be left out; looking them up later fails
    /// with [`ConversionError::InvalidCurrency`].
    pub fn new(
        entries: impl IntoIterator<Item = (CurrencyCode, Decimal)>,
    ) -> Result<Self, ConversionError> {
        let rates: BTreeMap<_, _> = entries.into_iter().collect();

        if let Some((&code, &rate)) = rates.iter().find(|(_, rate)| **rate <= Decimal::ZERO) {
            return Err(ConversionError::InvalidRate { code, rate });
        }

        let base = rates
            .get(&CurrencyCode::BASE)
            .copied()
            .ok_or(ConversionError::MissingBaseRate(CurrencyCode::BASE))?;
        if base != Decimal::ONE {
            return Err(ConversionError::InvalidBaseRate(base));
        }

        Ok(Self { rates })
    }

    /// The fixed table shipped with the converter.
    #[must_use]
    pub fn standard() -> Self {
        let rates = BTreeMap::from([
            (CurrencyCode::Usd, Decimal::ONE),
            (CurrencyCode::Eur, Decimal::new(85, 2)),
            (CurrencyCode::Gbp, Decimal::new(73, 2)),
            (CurrencyCode::Jpy, Decimal::new(1105, 1)),
            (CurrencyCode::Cad, Decimal::new(125, 2)),
            (CurrencyCode::Aud, Decimal::new(135, 2)),
            (CurrencyCode::Chf, Decimal::new(92, 2)),
            (CurrencyCode::Cny, Decimal::new(645, 2)),
            (CurrencyCode::Inr, Decimal::new(745, 1)),
            (CurrencyCode::Brl, Decimal::new(520, 2)),
        ]);
        Self { rates }
    }

    /// Returns the base-relative rate for `code`.
    pub fn rate(&self, code: CurrencyCode) -> Result<Decimal, ConversionError> {
        self.rates
            .get(&code)
            .copied()
            .ok_or_else(|| ConversionError::InvalidCurrency(code.to_string()))
    }

    /// Unrounded rate from `from` to `to` (1 `from` = result `to`).
    pub fn pair_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Decimal, ConversionError> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        to_rate
            .checked_div(from_rate)
            .ok_or(ConversionError::AmountOutOfRange(to_rate))
    }

    /// Returns true if the table has an entry for `code`.
    #[must_use]
    pub fn contains(&self, code: CurrencyCode) -> bool {
        self.rates.contains_key(&code)
    }

    /// Codes present in the table, in display order.
    pub fn codes(&self) -> impl Iterator<Item = CurrencyCode> + '_ {
        self.rates.keys().copied()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
