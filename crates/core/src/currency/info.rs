//! Descriptive currency records for presentation.

use serde::Serialize;

use super::code::CurrencyCode;

/// Display name and symbol for a supported currency.
///
/// Used only by presentation layers; the engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// Currency code.
    pub code: CurrencyCode,
    /// Human-readable name.
    pub name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
}

impl CurrencyInfo {
    /// Returns the record for `code`.
    #[must_use]
    pub const fn of(code: CurrencyCode) -> Self {
        let (name, symbol) = match code {
            CurrencyCode::Usd => ("US Dollar", "$"),
            CurrencyCode::Eur => ("Euro", "€"),
            CurrencyCode::Gbp => ("British Pound", "£"),
            CurrencyCode::Jpy => ("Japanese Yen", "¥"),
            CurrencyCode::Cad => ("Canadian Dollar", "C$"),
            CurrencyCode::Aud => ("Australian Dollar", "A$"),
            CurrencyCode::Chf => ("Swiss Franc", "CHF"),
            CurrencyCode::Cny => ("Chinese Yuan", "¥"),
            CurrencyCode::Inr => ("Indian Rupee", "₹"),
            CurrencyCode::Brl => ("Brazilian Real", "R$"),
        };
        Self { code, name, symbol }
    }

    /// All records, in [`CurrencyCode::ALL`] order.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        CurrencyCode::ALL.into_iter().map(Self::of).collect()
    }

    /// Caption shown under a currency selector, e.g. `"€ Euro"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.symbol, self.name)
    }
}
