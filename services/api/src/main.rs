use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::info;

use transactions_api::{app, config::Config, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "transactions_api=debug,postgres_models=debug,fx_rates=debug,tower_http=debug"
                    .into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    info!(environment = %config.environment, "Loaded configuration");

    let state = AppState::new(&config.database_url, &config.fx_rates_url).await?;
    info!("Database pool ready");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
