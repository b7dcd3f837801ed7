//! HTTP error mapping.
//!
//! Every error body has the shape `{"message": "..."}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use staffgraph_core::DirectoryError;

/// Message returned when a create/update body lacks a required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<DirectoryError> for HttpError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::MissingFields(fields) => {
                tracing::debug!(?fields, "Rejected request with missing fields");
                HttpError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
            }
            e @ DirectoryError::NotFound { .. } => HttpError::NotFound(e.to_string()),
            e @ (DirectoryError::Database(_) | DirectoryError::Serialization(_)) => {
                HttpError::Internal(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}
