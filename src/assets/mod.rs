//! Static asset subsystem.
//!
//! # Data Flow
//! ```text
//! Request outside /apps/
//!     → AssetResolver::resolve (unchanged request)
//!     → dir.rs (ServeDir over the built site)
//!     → file response, or the not-found page with status 404
//! ```
//!
//! # Design Decisions
//! - Resolution is a capability handed to the handler, not a global
//! - The handler never inspects or rewrites what the resolver returns

pub mod dir;

pub use dir::DirAssets;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;

/// Maps a request to a best-effort static response.
pub trait AssetResolver: Send + Sync {
    /// Resolve a request. Not-found and method errors are expressed as responses.
    fn resolve(&self, request: Request<Body>) -> BoxFuture<'_, Response>;
}
