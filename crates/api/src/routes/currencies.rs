//! Currency listing routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::{Value, json};

use convertly_core::currency::{CurrencyCode, CurrencyInfo, format_rate};

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code (ISO 4217).
    pub code: CurrencyCode,
    /// Currency name.
    pub name: &'static str,
    /// Currency symbol.
    pub symbol: &'static str,
    /// Units of this currency per one unit of the base currency.
    pub rate: String,
}

/// GET `/currencies` - List the currencies the rate table can convert.
async fn list_currencies(State(state): State<AppState>) -> Json<Value> {
    let rates = state.engine.rates();
    let currencies: Vec<CurrencyResponse> = CurrencyInfo::catalog()
        .into_iter()
        .filter_map(|info| {
            let rate = rates.rate(info.code).ok()?;
            Some(CurrencyResponse {
                code: info.code,
                name: info.name,
                symbol: info.symbol,
                rate: format_rate(rate),
            })
        })
        .collect();

    Json(json!({
        "base": CurrencyCode::BASE,
        "currencies": currencies
    }))
}
