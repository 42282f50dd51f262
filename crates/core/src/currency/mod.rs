//! Currency codes, rate table and the conversion engine.

pub mod amount;
pub mod code;
pub mod engine;
pub mod error;
pub mod info;
pub mod rates;
pub mod state;

#[cfg(test)]
mod props;

pub use amount::{format_amount, format_rate, parse_amount};
pub use code::CurrencyCode;
pub use engine::{ConversionEngine, ConversionResult};
pub use error::ConversionError;
pub use info::CurrencyInfo;
pub use rates::RateTable;
pub use state::ConverterState;
