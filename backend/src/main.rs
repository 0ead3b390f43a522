use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, Level};

use billsplit_backend::domain::SettlementService;
use billsplit_backend::rest;

/// Bind address used when BILLSPLIT_ADDR is not set
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Directory served for anything outside /api (the deployed form lives here)
const STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let state = rest::AppState::new(SettlementService::new());

    // CORS setup to allow a locally served form to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", rest::api_routes(state))
        .fallback_service(ServeDir::new(PathBuf::from(STATIC_DIR)))
        .layer(cors);

    let addr = bind_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("BILLSPLIT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    raw.parse()
        .with_context(|| format!("invalid bind address '{}'", raw))
}
