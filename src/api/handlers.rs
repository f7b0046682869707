//! Request handlers.

use axum::Json;
use axum::body::Bytes;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use super::dto::{HealthResponse, SolveRequest, SolveResponse};
use super::error::ApiError;
use crate::solver;

/// Step-through visualizer page, served at the root.
const INDEX_PAGE: &str = include_str!("../../assets/index.html");

/// Client-side playback logic for the visualizer.
const VISUALIZER_SCRIPT: &str = include_str!("../../assets/hanoi.js");

/// Styling for the visualizer.
const VISUALIZER_STYLESHEET: &str = include_str!("../../assets/hanoi.css");

// =============================================================================
// Handlers
// =============================================================================

/// `POST /solve`: returns the full move sequence for the requested puzzle.
pub async fn solve_puzzle(body: Bytes) -> Result<Json<SolveResponse>, ApiError> {
    let request = SolveRequest::from_body(&body);
    let disks = request.disk_count()?;
    let moves = solver::solve(disks);

    tracing::debug!(disks, move_count = moves.len(), "solved puzzle");

    Ok(Json(SolveResponse::from(moves.as_slice())))
}

/// `GET /`: serves the embedded visualizer page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// `GET /static/js/hanoi.js`.
pub async fn visualizer_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        VISUALIZER_SCRIPT,
    )
}

/// `GET /static/css/hanoi.css`.
pub async fn visualizer_stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        VISUALIZER_STYLESHEET,
    )
}

/// `GET /health`: liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// =============================================================================
// Tests
// =============================================================================
