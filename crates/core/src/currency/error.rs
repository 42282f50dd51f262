//! Currency conversion error types.

use rust_decimal::Decimal;
use thiserror::Error;

use super::code::CurrencyCode;

/// Errors that can occur while building a rate table or converting.
///
/// An unparseable amount is NOT an error: it degrades to "no result".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Currency code outside the supported set, or missing from the rate table.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Rate table entry is zero or negative.
    #[error("Invalid rate for {code}: {rate} (must be positive)")]
    InvalidRate {
        /// Currency the rate belongs to.
        code: CurrencyCode,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Base currency rate is not exactly one.
    #[error("Base currency rate must be exactly 1, got {0}")]
    InvalidBaseRate(Decimal),

    /// Rate table has no entry for the base currency.
    #[error("Rate table has no entry for base currency {0}")]
    MissingBaseRate(CurrencyCode),

    /// Converted value does not fit in a decimal.
    #[error("Amount {0} is out of range for conversion")]
    AmountOutOfRange(Decimal),
}
