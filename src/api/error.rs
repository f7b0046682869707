//! API error handling.
//!
//! Every error leaving the service is rendered as `{"error": "<message>"}`
//! with the matching HTTP status, so clients always see one shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::dto::{ErrorResponse, MAX_DISK_COUNT, MIN_DISK_COUNT};

// =============================================================================
// ApiError
// =============================================================================

/// Errors the request handlers report to clients.
///
/// The `Display` strings double as the client-facing messages, so they name
/// what the caller did wrong without leaking anything internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The `disks` value could not be read as an integer.
    #[error("Invalid input for disks")]
    InvalidDiskCount,

    /// The `disks` value is an integer outside the accepted range.
    #[error("Disks must be between {min} and {max}", min = MIN_DISK_COUNT, max = MAX_DISK_COUNT)]
    DiskCountOutOfRange,

    /// Catch-all for failures no request input can explain.
    #[error("An unexpected error occurred")]
    Internal,
}

impl ApiError {
    /// Maps the error to its HTTP status code.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidDiskCount | Self::DiskCountOutOfRange => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = ErrorResponse::new(self.to_string());

        (status_code, Json(body)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
