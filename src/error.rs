use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    catalog::CatalogError,
    dto::search::FieldError,
    response::{ErrorBody, ErrorDetails},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Route not found")]
    NotFound,

    #[error("Invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Failed to load catalog")]
    Catalog(#[from] CatalogError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody::with_message("NOT_FOUND", "Route not found"),
            ),
            AppError::InvalidJson(_) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::with_details(
                    "BAD_REQUEST",
                    ErrorDetails::Messages(vec!["Invalid JSON".to_string()]),
                ),
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::with_details("BAD_REQUEST", ErrorDetails::Fields(errors)),
            ),
            AppError::Catalog(err) => {
                tracing::error!(error = %err, "catalog load failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::with_message("INTERNAL_ERROR", "Failed to load catalog"),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::with_message("INTERNAL_ERROR", "Internal Server Error"),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
