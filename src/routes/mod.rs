use axum::{Router, routing::get};

use crate::{error::AppError, state::AppState};

pub mod carts;
pub mod doc;
pub mod health;
pub mod line_items;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/carts", carts::router())
        .nest("/products", products::router())
}

/// The full application: health check, `/api`, docs and a JSON 404 fallback.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
