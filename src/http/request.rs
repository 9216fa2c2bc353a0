//! Request inspection helpers.
//!
//! # Design Decisions
//! - The URL matched against conditions is the original request target
//!   (path plus query), as received before any router nesting strips a prefix
//! - Request IDs are assigned by `tower_http::request_id` and read back
//!   from the `x-request-id` header

use axum::extract::OriginalUri;
use axum::http::{Request, Uri};

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Path and query of the request as originally received.
pub fn original_url<B>(req: &Request<B>) -> String {
    let uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri)
        .unwrap_or_else(|| req.uri());
    path_and_query(uri)
}

fn path_and_query(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// Request ID assigned upstream, or `"unknown"`.
pub fn request_id<B>(req: &Request<B>) -> String {
    req.headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
