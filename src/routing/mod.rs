//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → matcher.rs (PathPrefixMatcher: prefix check on the path, query ignored)
//!     → router.rs (Route::classify through the `/apps/` matcher)
//!     → Return: Route::Proxy or Route::Static
//! ```
//!
//! # Design Decisions
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same input always matches same branch
//! - Case-sensitive, byte-exact match on `/apps/`

pub mod matcher;
pub mod router;

pub use matcher::{Matcher, PathPrefixMatcher};
pub use router::{is_proxy_path, Route, PROXY_MATCHER, PROXY_PREFIX};
