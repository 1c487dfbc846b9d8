//! Service Error Types
//!
//! Typed outcomes for repository and asset-store operations. Validation and
//! not-found conditions are returned as values, not panics, so the HTTP layer
//! can map them directly to status codes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// JSON error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required field is missing or invalid (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// No item exists with the requested id (HTTP 404).
    #[error("item {0} not found")]
    NotFound(u64),

    /// The request path does not name a known resource (HTTP 404).
    ///
    /// Covers item paths whose id segment is not a positive integer; they read
    /// the same as any other unknown route.
    #[error("unknown route")]
    UnknownRoute,

    /// Asset store failure; surfaced as a generic failure, never retried.
    #[error("asset store error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::UnknownRoute => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        if let Self::Io(err) = &self {
            tracing::error!("Asset store failure: {}", err);
        }
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
