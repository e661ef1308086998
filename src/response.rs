use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::search::FieldError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// Either plain messages or per-field errors, never both.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetails {
    Messages(Vec<String>),
    Fields(Vec<FieldError>),
}

impl ErrorBody {
    pub fn with_message(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorPayload {
                code: code.into(),
                message: Some(message.into()),
                details: None,
            },
        }
    }

    pub fn with_details(code: impl Into<String>, details: ErrorDetails) -> Self {
        Self {
            error: ErrorPayload {
                code: code.into(),
                message: None,
                details: Some(details),
            },
        }
    }
}
