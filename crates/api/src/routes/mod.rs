//! API route definitions.

use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use convertly_core::currency::ConversionError;
use convertly_shared::AppError;

use crate::AppState;

pub mod convert;
pub mod currencies;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(convert::routes())
}

/// Maps an engine error onto the application error taxonomy.
pub(crate) fn conversion_error(err: ConversionError) -> AppError {
    match err {
        ConversionError::InvalidCurrency(_) | ConversionError::AmountOutOfRange(_) => {
            AppError::Validation(err.to_string())
        }
        ConversionError::InvalidRate { .. }
        | ConversionError::InvalidBaseRate(_)
        | ConversionError::MissingBaseRate(_) => AppError::Internal(err.to_string()),
    }
}

/// Fallback for paths no route matches.
pub(crate) async fn not_found(uri: Uri) -> Response {
    error_response(&AppError::NotFound(uri.path().to_string()))
}

/// Renders an application error as a JSON response.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    }

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}
