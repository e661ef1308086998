use axum::Router;

use crate::{error::AppError, state::AppState};

pub mod doc;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest("/products", products::router())
}

/// Every unmatched path or method ends up here.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
