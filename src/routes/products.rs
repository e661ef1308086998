use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::Uri,
    routing::post,
};

use crate::{
    dto::search::{Filter, SearchRequest, SearchResponse},
    error::{AppError, AppResult},
    response::ErrorBody,
    routes::not_found,
    services::{normalizer::normalize, search_service, validator},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/search", post(search_products).fallback(not_found))
}

#[utoipa::path(
    post,
    path = "/products/search",
    request_body(
        content = Filter,
        description = "Search criteria; every field is optional and an empty body matches everything",
    ),
    responses(
        (status = 200, description = "Matching products", body = SearchResponse),
        (status = 400, description = "Invalid JSON or invalid criteria", body = ErrorBody),
        (status = 500, description = "Catalog could not be loaded", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    uri: Uri,
    body: Bytes,
) -> AppResult<Json<SearchResponse>> {
    // The route is matched on the full request target, query included.
    if uri.query().is_some() {
        return Err(AppError::NotFound);
    }

    let request = SearchRequest::parse(&body).inspect_err(|err| {
        tracing::debug!(error = %err, "search body is not valid JSON");
    })?;

    let filter = validator::validate(&request)
        .into_result()
        .map_err(|errors| {
            tracing::debug!(errors = ?errors, "search criteria rejected");
            AppError::Validation(errors)
        })?;
    tracing::debug!(?filter, match_all = filter.is_empty(), "search criteria accepted");

    let catalog = Arc::clone(&state.catalog);
    let records = tokio::task::spawn_blocking(move || catalog.load())
        .await
        .map_err(|err| AppError::Internal(err.into()))??;

    let scanned = records.len();
    let items = search_service::search(records.into_iter().map(normalize), &filter);
    tracing::debug!(scanned, total = items.len(), "search completed");

    Ok(Json(SearchResponse::from(items)))
}
