use axum::{extract::State, Json};
use tracing::info;

use crate::{models::Product, AppState};

// ── List ──────────────────────────────────────────────────────────────────────

/// `GET /api/products` — the full catalog, re-encoded on every request.
///
/// Same payload for the life of the process: the shared sequence was loaded
/// once at startup and is read-only here, so concurrent requests need no
/// coordination. No filters, no pagination.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.products.as_ref().clone();

    info!(count = products.len(), "Listed products");

    Json(products)
}
