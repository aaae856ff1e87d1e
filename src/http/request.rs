//! Outbound request preparation.
//!
//! # Responsibilities
//! - Derive the target URL from the backend origin and the inbound URI
//! - Decide whether the inbound body travels with the request
//! - Prepare the forwarded header set
//!
//! # Design Decisions
//! - Target URL is plain concatenation: `origin + path + ('?' + query)`
//! - `Host` is regenerated by the client from the target URL
//! - GET and HEAD never carry a body; framing headers for a dropped body go with it

use axum::http::header::{CONTENT_LENGTH, HOST, TRANSFER_ENCODING};
use axum::http::{HeaderMap, Method, Uri};

/// Build `origin + path + ('?' + query if non-empty)`.
pub fn build_target_url(origin: &str, path: &str, query: Option<&str>) -> String {
    let query = query.filter(|q| !q.is_empty());
    let mut target =
        String::with_capacity(origin.len() + path.len() + query.map_or(0, |q| q.len() + 1));
    target.push_str(origin);
    target.push_str(path);
    if let Some(q) = query {
        target.push('?');
        target.push_str(q);
    }
    target
}

/// Target URL for an inbound URI.
pub fn target_for_uri(origin: &str, uri: &Uri) -> String {
    build_target_url(origin, uri.path(), uri.query())
}

/// Whether a request with this method forwards its body.
pub fn forwards_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD)
}

/// Headers sent to the backend.
pub fn outbound_headers(inbound: &HeaderMap, with_body: bool) -> HeaderMap {
    let mut headers = inbound.clone();
    headers.remove(HOST);
    if !with_body {
        headers.remove(CONTENT_LENGTH);
        headers.remove(TRANSFER_ENCODING);
    }
    headers
}
