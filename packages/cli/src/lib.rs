// ABOUTME: Server runtime for Taskboard
// ABOUTME: Wires config, database state, CORS, and the API router together

use axum::http::Method;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;

use config::Config;
use taskboard_core::DbState;

pub async fn run_server() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    info!("Starting taskboard server");
    info!("CORS origin: {}", config.cors_origin);

    let db = DbState::init_with_path(config.database_path.clone()).await?;

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS and request tracing
    let app = taskboard_api::create_router(db)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
