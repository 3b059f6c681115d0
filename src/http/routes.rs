//! Routing collaborator mounted under `/api`.
//!
//! Domain routers (flight statuses and friends) attach here by merging into
//! the returned router; the bootstrap core only guarantees the mount point
//! exists and that everything under it goes through the shared middleware
//! stack.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;

/// Router for the `/api` subtree.
pub fn api_router() -> Router {
    Router::new().fallback(unknown_api_route)
}

async fn unknown_api_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "unknown API route")
}
