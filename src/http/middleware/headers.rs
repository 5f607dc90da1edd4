//! Response Header Augmentation Middleware.
//! Disables client-side caching and allows cross-origin access.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// `Cache-Control` value sent with every response.
pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";

/// Append the fixed dev-server headers to a response header map.
///
/// None of these fields collide with anything the file service sets
/// (`Content-Type`, `Content-Length`, ...), so appending never replaces
/// a collaborator header.
pub fn append_dev_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_VALUE),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
}

/// Augment every outgoing response with the dev-server headers.
///
/// Runs the inner service to completion first, so the headers land on
/// whatever the file service produced: success, 404, or a method
/// rejection. Layered exactly once in the router stack.
pub async fn augment_response_headers(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    append_dev_headers(response.headers_mut());
    response
}
