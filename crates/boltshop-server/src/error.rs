//! API and startup errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use boltshop_commerce::CommerceError;
use boltshop_db::DbError;
use serde_json::json;
use thiserror::Error;

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn product_not_found() -> Self {
        ApiError::NotFound("Product not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Validation(message) => ApiError::BadRequest(message),
            DbError::NotFound(_) => ApiError::product_not_found(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = match self {
            ApiError::InvalidCredentials => json!({ "success": false, "message": self.to_string() }),
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Errors that stop the server from starting or running.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CommerceError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
