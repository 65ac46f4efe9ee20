//! Error responses for the HTTP adapter.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::LedgerError;

/// Error body returned on every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Errors raised while handling a request.
///
/// Ledger errors are wrapped by the status they map to on the route that
/// produced them.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid game id '{0}'")]
    BadId(String),

    #[error("malformed request body: {0}")]
    BadJson(String),

    #[error("no route for this path")]
    RouteNotFound,

    /// Lookup failures, served as 404.
    #[error(transparent)]
    NotFound(LedgerError),

    /// Rejected bets and bad input, served as 400.
    #[error(transparent)]
    Rejected(LedgerError),

    /// Refused settlements, served as 403.
    #[error(transparent)]
    Forbidden(LedgerError),
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadId(_) | Self::BadJson(_) | Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadId(_) => "bad_id",
            Self::BadJson(_) => "bad_json",
            Self::RouteNotFound => "not_found",
            Self::NotFound(e) | Self::Rejected(e) | Self::Forbidden(e) => e.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
