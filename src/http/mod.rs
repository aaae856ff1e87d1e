//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, timeout + trace layers)
//!     → handler.rs (branch on /apps/)
//!         proxy:  request.rs (target URL, body policy, headers)
//!                 → upstream.rs (one outbound fetch, redirects followed)
//!                 → response.rs (Cache-Control: no-store, streamed body)
//!         static: assets::AssetResolver (response returned untouched)
//!     → Send to client
//! ```

pub mod error;
pub mod handler;
pub mod request;
pub mod response;
pub mod server;
pub mod upstream;

pub use error::{ForwardError, ServerError};
pub use handler::handle;
pub use server::{AppState, EdgeServer};
pub use upstream::{build_client, Backend};
