//! Conversion and swap routes.
//!
//! Every request recomputes from scratch; nothing is cached between calls.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use convertly_core::currency::{ConversionEngine, ConverterState, CurrencyCode, format_rate};
use convertly_shared::{AppError, AppResult};

use super::{conversion_error, error_response};
use crate::AppState;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/convert", get(convert))
        .route("/swap", post(swap))
        .route("/state", get(initial_state))
}

/// Query parameters for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Amount as entered; missing is the same as empty.
    #[serde(default)]
    pub amount: String,
    /// Source currency code (defaults to the configured pair).
    pub from: Option<String>,
    /// Target currency code (defaults to the configured pair).
    pub to: Option<String>,
}

/// Response for a conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Source currency.
    pub from: CurrencyCode,
    /// Target currency.
    pub to: CurrencyCode,
    /// Amount as entered.
    pub amount: String,
    /// Converted amount with 2 decimals, `null` when there is nothing to show.
    pub converted_amount: Option<String>,
    /// Effective rate with 4 decimals, `null` for an empty or zero amount.
    pub effective_rate: Option<String>,
    /// Caption such as `1 USD = 0.8500 EUR`.
    pub rate_line: Option<String>,
}

impl From<ConverterState> for ConvertResponse {
    fn from(state: ConverterState) -> Self {
        let effective_rate =
            ConversionEngine::effective_rate(&state.amount, &state.converted_amount);
        let rate_line = state.rate_line();
        Self {
            from: state.from,
            to: state.to,
            converted_amount: Some(state.converted_amount).filter(|c| !c.is_empty()),
            amount: state.amount,
            effective_rate: effective_rate.map(format_rate),
            rate_line,
        }
    }
}

fn resolve_code(code: Option<&str>, fallback: CurrencyCode) -> AppResult<CurrencyCode> {
    code.map_or(Ok(fallback), |code| code.parse::<CurrencyCode>().map_err(conversion_error))
}

fn run_conversion(state: &AppState, query: ConvertQuery) -> AppResult<ConvertResponse> {
    let from = resolve_code(query.from.as_deref(), state.defaults.from)?;
    let to = resolve_code(query.to.as_deref(), state.defaults.to)?;

    let form = ConverterState {
        from,
        to,
        amount: query.amount,
        converted_amount: String::new(),
    }
    .recompute(&state.engine)
    .map_err(conversion_error)?;

    debug!(
        %from,
        %to,
        amount = %form.amount,
        converted = %form.converted_amount,
        "Conversion requested"
    );
    Ok(form.into())
}

/// GET `/convert?amount=&from=&to=` - Convert an amount.
async fn convert(State(state): State<AppState>, Query(query): Query<ConvertQuery>) -> Response {
    match run_conversion(&state, query) {
        Ok(response) => Json(response).into_response(),
        Err(e) => error_response(&e),
    }
}

/// POST `/swap` - Swap both currencies and both amounts.
async fn swap(payload: Result<Json<ConverterState>, JsonRejection>) -> Response {
    let Json(form) = match payload {
        Ok(form) => form,
        Err(rejection) => {
            return error_response(&AppError::Validation(rejection.body_text()));
        }
    };

    let swapped = ConversionEngine::swap(form);
    debug!(from = %swapped.from, to = %swapped.to, "Swapped converter sides");
    Json(swapped).into_response()
}

/// GET `/state` - Form state a new client starts from.
async fn initial_state(State(state): State<AppState>) -> Json<ConverterState> {
    Json(state.defaults.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::new(ConversionEngine::standard(), ConverterState::default());
        routes().with_state(state)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_convert_usd_to_eur() {
        let (status, json) = get_json("/convert?amount=100&from=USD&to=EUR").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "from": "USD",
                "to": "EUR",
                "amount": "100",
                "converted_amount": "85.00",
                "effective_rate": "0.8500",
                "rate_line": "1 USD = 0.8500 EUR"
            })
        );
    }

    #[tokio::test]
    async fn test_convert_uses_configured_pair_by_default() {
        let (status, json) = get_json("/convert?amount=100").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["from"], "USD");
        assert_eq!(json["to"], "EUR");
        assert_eq!(json["converted_amount"], "85.00");
    }

    #[tokio::test]
    async fn test_convert_lower_case_codes() {
        let (status, json) = get_json("/convert?amount=100&from=eur&to=usd").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["converted_amount"], "117.65");
        assert_eq!(json["effective_rate"], "1.1765");
    }

    #[rstest]
    #[case::missing("/convert?from=USD&to=EUR")]
    #[case::empty("/convert?amount=&from=USD&to=EUR")]
    #[case::not_a_number("/convert?amount=abc&from=USD&to=EUR")]
    #[tokio::test]
    async fn test_convert_invalid_amount_is_empty_result(#[case] uri: &str) {
        let (status, json) = get_json(uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["converted_amount"], Value::Null);
        assert_eq!(json["effective_rate"], Value::Null);
        assert_eq!(json["rate_line"], Value::Null);
    }

    #[tokio::test]
    async fn test_convert_zero_amount_hides_rate() {
        let (status, json) = get_json("/convert?amount=0&from=USD&to=JPY").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["converted_amount"], "0.00");
        assert_eq!(json["effective_rate"], Value::Null);
        assert_eq!(json["rate_line"], Value::Null);
    }

    #[tokio::test]
    async fn test_convert_unknown_currency() {
        let (status, json) = get_json("/convert?amount=100&from=USD&to=XYZ").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Validation error: Invalid currency: XYZ");
    }

    #[tokio::test]
    async fn test_swap() {
        let request = Request::builder()
            .method("POST")
            .uri("/swap")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"from":"USD","to":"EUR","amount":"100","converted_amount":"85.00"}"#,
            ))
            .unwrap();

        let (status, json) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "from": "EUR",
                "to": "USD",
                "amount": "85.00",
                "converted_amount": "100"
            })
        );
    }

    #[tokio::test]
    async fn test_swap_rejects_unknown_currency() {
        let request = Request::builder()
            .method("POST")
            .uri("/swap")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"from":"USD","to":"XYZ"}"#))
            .unwrap();

        let (status, json) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("XYZ"));
    }

    #[tokio::test]
    async fn test_swap_rejects_malformed_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/swap")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let (status, json) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_initial_state() {
        let (status, json) = get_json("/state").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "from": "USD",
                "to": "EUR",
                "amount": "",
                "converted_amount": ""
            })
        );
    }
}
