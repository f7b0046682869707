//! # hanoi-api
//!
//! Tower of Hanoi solver behind a small HTTP API.
//!
//! The crate pairs a pure move generator with an axum service that returns
//! full solution sequences and serves an embedded step-through visualizer.
//!
//! - [`solver`]: puzzle types and the recursive move generator
//! - [`api`]: routes, handlers, and wire payloads
//! - [`server`]: bind configuration and the server lifecycle

pub mod api;
pub mod server;
pub mod solver;
