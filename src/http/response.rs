//! Response handling and transformation.
//!
//! # Responsibilities
//! - Turn the backend response into the client response
//! - Force `Cache-Control: no-store` on everything that came from the backend
//! - Stream the body instead of buffering it
//!
//! # Design Decisions
//! - Status and every other header pass through untouched
//! - Any number of backend `Cache-Control` values collapse to one `no-store`

use axum::body::Body;
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;

/// The only value proxied responses may carry in `Cache-Control`.
pub const NO_STORE: &str = "no-store";

/// Replace every `Cache-Control` value with `no-store`.
pub fn override_cache_control(headers: &mut HeaderMap) {
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
}

/// Build the client response from a backend response.
pub fn from_upstream(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    override_cache_control(&mut headers);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
