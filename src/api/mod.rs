//! HTTP surface of the solver.
//!
//! This module contains route definitions, request/response payloads, and the
//! handlers behind each route.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use dto::{
    DEFAULT_DISK_COUNT, ErrorResponse, HealthResponse, MAX_DISK_COUNT, MIN_DISK_COUNT, MoveDto,
    SolveRequest, SolveResponse,
};
pub use error::ApiError;
pub use handlers::{health_check, index, solve_puzzle, visualizer_script, visualizer_stylesheet};
pub use routes::create_router;
