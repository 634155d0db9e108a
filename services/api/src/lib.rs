pub mod config;
pub mod errors;
pub mod extractors;
pub mod v1;

use axum::{routing::get, Json, Router};
use fx_rates::FxRatesClient;
use postgres_models::DbPool;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub fx_rates: FxRatesClient,
}

impl AppState {
    pub async fn new(database_url: &str, fx_rates_url: &str) -> anyhow::Result<Self> {
        let db_pool = postgres_models::create_pool(database_url).await
            .map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?;

        Ok(Self::from_parts(db_pool, FxRatesClient::new(fx_rates_url)))
    }

    pub fn from_parts(db_pool: DbPool, fx_rates: FxRatesClient) -> Self {
        Self { db_pool, fx_rates }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "transactions-api"
    }))
}

/// The complete HTTP application: health check plus the `/api/v1` routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", v1::router())
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        )
        .with_state(state)
}
