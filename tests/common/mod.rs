//! Common test helpers for integration tests.
//!
//! # Note
//!
//! The `#![allow(dead_code)]` attribute is necessary because Rust compiles
//! each integration test file as a separate crate. Helpers used by only one
//! test file would otherwise generate dead code warnings during compilation
//! of the others.

#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{Method, Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hanoi_api::api::dto::{MoveDto, SolveResponse};
use hanoi_api::api::routes::create_router;

// =============================================================================
// Request Helpers
// =============================================================================

/// Sends a request through a fresh router.
pub async fn send(request: Request<Body>) -> Response {
    create_router()
        .oneshot(request)
        .await
        .expect("request should be handled")
}

/// Builds a plain GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Builds a `POST /solve` request with a JSON body.
pub fn solve_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/solve")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

// =============================================================================
// Response Helpers
// =============================================================================

/// Drains a response body.
pub async fn read_body(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Parses a successful solve response into its move list.
pub async fn read_moves(response: Response) -> Vec<MoveDto> {
    let body = read_body(response).await;
    let parsed: SolveResponse = serde_json::from_slice(&body).unwrap();
    parsed.moves
}

// =============================================================================
// Solution Checking
// =============================================================================

/// Replays a move list against the starting position and asserts it is a
/// legal, complete solution: only top disks move, no disk ever rests on a
/// smaller one, and every disk ends on the destination peg.
pub fn assert_legal_solution(disks: u8, moves: &[MoveDto]) {
    let mut stacks: [Vec<u8>; 3] = [(1..=disks).rev().collect(), Vec::new(), Vec::new()];

    for step in moves {
        let MoveDto(disk, from, to) = *step;
        let moved = stacks[usize::from(from)].pop();
        assert_eq!(moved, Some(disk), "disk {disk} is not on top of peg {from}");

        if let Some(&resting) = stacks[usize::from(to)].last() {
            assert!(disk < resting, "disk {disk} placed on smaller disk {resting}");
        }
        stacks[usize::from(to)].push(disk);
    }

    assert!(stacks[0].is_empty(), "source peg should end empty");
    assert!(stacks[1].is_empty(), "middle peg should end empty");

    let expected: Vec<u8> = (1..=disks).rev().collect();
    assert_eq!(stacks[2], expected, "destination peg should hold every disk");
}
