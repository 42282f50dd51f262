//! HTTP API layer with Axum routes over the conversion engine.
//!
//! This crate is a presentation layer: it turns requests into calls on
//! [`ConversionEngine`] and renders the results. It holds no state of its own
//! beyond the injected engine and the configured starting pair.

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use convertly_core::currency::{ConversionEngine, ConverterState, CurrencyCode};
use convertly_shared::{AppError, AppResult, ConverterConfig};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion engine over the immutable rate table.
    pub engine: Arc<ConversionEngine>,
    /// Form state a new client starts from.
    pub defaults: ConverterState,
}

impl AppState {
    /// Creates state from an engine and a starting pair.
    #[must_use]
    pub fn new(engine: ConversionEngine, defaults: ConverterState) -> Self {
        Self {
            engine: Arc::new(engine),
            defaults,
        }
    }

    /// Creates state over the standard rate table using the configured pair.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a configured code is not supported.
    pub fn from_config(config: &ConverterConfig) -> AppResult<Self> {
        let from = parse_configured_code(&config.default_from)?;
        let to = parse_configured_code(&config.default_to)?;
        Ok(Self::new(ConversionEngine::standard(), ConverterState::new(from, to)))
    }
}

fn parse_configured_code(code: &str) -> AppResult<CurrencyCode> {
    code.parse::<CurrencyCode>()
        .map_err(|e| AppError::Config(format!("converter default: {e}")))
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
