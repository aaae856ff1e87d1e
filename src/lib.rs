//! Edge router for the mechanical handbook.
//!
//! Requests under `/apps/` are forwarded to the Dash backend with
//! `Cache-Control: no-store` forced on the reply; every other path is served
//! from the built static site.

pub mod assets;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use assets::{AssetResolver, DirAssets};
pub use config::EdgeConfig;
pub use http::{handle, Backend, EdgeServer, ForwardError};
pub use lifecycle::Shutdown;
