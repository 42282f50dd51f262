//! Convertly API Server
//!
//! Main entry point for the currency conversion service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use convertly_api::{AppState, create_router};
use convertly_core::currency::CurrencyCode;
use convertly_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "convertly=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Rate table is fixed for the lifetime of the process
    let state = AppState::from_config(&config.converter)?;
    info!(
        base = %CurrencyCode::BASE,
        currencies = state.engine.rates().codes().count(),
        default_from = %state.defaults.from,
        default_to = %state.defaults.to,
        "Conversion engine ready"
    );

    let app = create_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
