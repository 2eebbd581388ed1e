//! Server entry point: environment config, file logging sink, data
//! directory, router.

use locadora_api::{app_router, logging, AppConfig, AppState};
use std::fs;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    logging::init(&config.log_dir)?;
    fs::create_dir_all(&config.data_dir)?;

    let state = AppState::new(config.data_dir.clone());
    let app = app_router(state).layer(RequestBodyLimitLayer::new(1024 * 1024));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
