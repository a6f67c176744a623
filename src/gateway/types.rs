//! Gateway error types and response mapping
//!
//! All failures are client-caused and terminal for the request:
//! - `NotFound` → 404, unknown merchant on menu lookup
//! - `Malformed` → 400, body that does not deserialize (wrong types,
//!   missing fields, invalid JSON)
//! - `Validation` → 422, well-formed body breaking a field rule
//!
//! Error bodies follow the `{"detail": ...}` shape the storefront
//! frontend already consumes, with an extra `field` path on 422s.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::orders::ValidationError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Malformed(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    detail,
                    field: None,
                },
            ),
            ApiError::Malformed(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    detail,
                    field: None,
                },
            ),
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    detail: err.reason,
                    field: Some(err.field),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
