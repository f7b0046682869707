//! Request and response payloads for the solver API.
//!
//! The request side is deliberately lenient: a missing body, a body that is
//! not a JSON object, or an absent `disks` field all fall back to the default
//! puzzle size. Validation only rejects a `disks` value that is present but
//! unusable.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::solver::Move;

/// Puzzle size used when the client does not ask for one.
pub const DEFAULT_DISK_COUNT: u8 = 3;

/// Smallest puzzle the API accepts.
pub const MIN_DISK_COUNT: u8 = 3;

/// Largest puzzle the API accepts.
pub const MAX_DISK_COUNT: u8 = 8;

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /solve`.
///
/// `disks` is kept as raw JSON so validation can tell apart the cases a typed
/// field would collapse: absent, explicit null, wrong type, numeric string,
/// out of range.
#[derive(Debug, Clone, Default)]
pub struct SolveRequest {
    disks: Option<Value>,
}

impl SolveRequest {
    /// Parses a request body.
    ///
    /// Only a JSON object carries a `disks` field. Any other body, including
    /// one that is not JSON at all, is treated as an empty request.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(Value::Object(mut members)) => Self {
                disks: members.remove("disks"),
            },
            _ => Self::default(),
        }
    }

    /// Validates the requested puzzle size.
    ///
    /// Accepts integers and strings that spell integers, with surrounding
    /// whitespace ignored. Everything else is rejected as invalid rather
    /// than coerced.
    pub fn disk_count(&self) -> Result<u8, ApiError> {
        match &self.disks {
            None => Ok(DEFAULT_DISK_COUNT),
            Some(Value::Number(number)) => number.as_i64().map_or_else(
                || {
                    if number.is_u64() {
                        Err(ApiError::DiskCountOutOfRange)
                    } else {
                        Err(ApiError::InvalidDiskCount)
                    }
                },
                check_range,
            ),
            Some(Value::String(text)) => match text.trim().parse::<i64>() {
                Ok(count) => check_range(count),
                Err(parse_error) => match parse_error.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Err(ApiError::DiskCountOutOfRange)
                    }
                    _ => Err(ApiError::InvalidDiskCount),
                },
            },
            Some(_) => Err(ApiError::InvalidDiskCount),
        }
    }
}

fn check_range(count: i64) -> Result<u8, ApiError> {
    u8::try_from(count)
        .ok()
        .filter(|count| (MIN_DISK_COUNT..=MAX_DISK_COUNT).contains(count))
        .ok_or(ApiError::DiskCountOutOfRange)
}

// =============================================================================
// Responses
// =============================================================================

/// One move on the wire: `[disk, from, to]` with pegs as board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDto(pub u8, pub u8, pub u8);

impl From<&Move> for MoveDto {
    fn from(step: &Move) -> Self {
        Self(step.disk, step.from.index(), step.to.index())
    }
}

/// Body of a successful `POST /solve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub moves: Vec<MoveDto>,
}

impl From<&[Move]> for SolveResponse {
    fn from(moves: &[Move]) -> Self {
        Self {
            moves: moves.iter().map(MoveDto::from).collect(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
