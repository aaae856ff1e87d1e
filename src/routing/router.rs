//! Route lookup.
//!
//! # Responsibilities
//! - Decide, per request, between the backend and the asset bucket
//! - Return an explicit branch rather than a silent default
//!
//! # Design Decisions
//! - Pure function of the path, no state
//! - A single prefix rule; every other path is static

use axum::body::Body;
use axum::http::Request;

use crate::routing::matcher::{Matcher, PathPrefixMatcher};

/// Path prefix reserved for the backend application.
pub const PROXY_PREFIX: &str = "/apps/";

/// The rule that sends a request to the backend.
pub const PROXY_MATCHER: PathPrefixMatcher = PathPrefixMatcher::from_static(PROXY_PREFIX);

/// Branch chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Forward to the backend origin.
    Proxy,
    /// Serve from the static asset bucket.
    Static,
}

impl Route {
    /// Classify a request with the default `/apps/` rule.
    pub fn classify(req: &Request<Body>) -> Self {
        if PROXY_MATCHER.matches(req) {
            Route::Proxy
        } else {
            Route::Static
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Route::Proxy => "proxy",
            Route::Static => "static",
        }
    }
}

/// True iff `path` belongs to the backend (`/apps/` prefix, case-sensitive).
pub fn is_proxy_path(path: &str) -> bool {
    PROXY_MATCHER.matches_path(path)
}
