//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler / upstream / server
//!     → tracing events (method, path, route, target, status)
//!     → logging.rs (EnvFilter + fmt layer, pretty or JSON)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Structured fields instead of formatted strings
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::{init_logging, LoggingError};
