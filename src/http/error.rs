//! Error types for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of the single outbound fetch on the proxy branch.
///
/// `handle` returns this untranslated; only the hosting server turns it
/// into a generic 502.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Origin + path + query did not form a valid absolute URL.
    #[error("invalid target URL '{target}': {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    /// Connect, DNS, TLS, redirect-limit or timeout failure talking to the backend.
    #[error("upstream request to {target} failed: {source}")]
    Upstream {
        target: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ForwardError {
    pub fn target(&self) -> &str {
        match self {
            ForwardError::InvalidTarget { target, .. } | ForwardError::Upstream { target, .. } => {
                target
            }
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
    }
}

/// Error type for server construction.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build outbound HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
