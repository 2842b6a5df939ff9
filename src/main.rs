use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod loader;
mod models;

use crate::config::Config;
use crate::models::Product;

/// Shared application state — cheap to clone (all heap behind Arc).
/// The catalog is loaded once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<Vec<Product>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_mock_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Product Mock Service — Rust + Axum  ║");
    info!("╚══════════════════════════════════════╝");

    // Load the catalog before binding. Any failure aborts startup here, so
    // no connection is ever accepted against a half-loaded catalog.
    let products = loader::load_products(&config.data_path)?;

    let state = AppState {
        products: Arc::new(products),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Server running at http://{}", addr);
    info!("Try: curl http://{}/api/products", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
