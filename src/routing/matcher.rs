//! Route matching logic.
//!
//! # Responsibilities
//! - Express the proxy rule as a matcher over the whole request
//! - Match path prefix (case-sensitive, byte-exact)
//!
//! # Design Decisions
//! - Only the path takes part; query, host and method are ignored
//! - No regex to guarantee O(n) matching

use std::borrow::Cow;

use axum::body::Body;
use axum::http::Request;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefixMatcher {
    prefix: Cow<'static, str>,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Matcher over a compile-time prefix, usable in `const` position.
    pub const fn from_static(prefix: &'static str) -> Self {
        Self {
            prefix: Cow::Borrowed(prefix),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Path-only form of [`Matcher::matches`].
    pub fn matches_path(&self, path: &str) -> bool {
        path.starts_with(self.prefix.as_ref())
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        self.matches_path(req.uri().path())
    }
}
