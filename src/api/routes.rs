//! Route table and middleware stack.

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::handlers;

/// Builds the application router.
///
/// The catch-panic layer sits outermost so a panicking handler still produces
/// the standard error body instead of a dropped connection.
#[must_use]
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/solve", post(handlers::solve_puzzle))
        .route("/health", get(handlers::health_check))
        .route("/static/js/hanoi.js", get(handlers::visualizer_script))
        .route("/static/css/hanoi.css", get(handlers::visualizer_stylesheet))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(message, "request handler panicked");

    ApiError::Internal.into_response()
}

// =============================================================================
// Tests
// =============================================================================
