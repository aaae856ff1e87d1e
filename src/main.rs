//! handbook-edge
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ server ──▶ handle ──┬─ /apps/* ──▶ Backend ──▶ Dash origin
//!                                         │                 │
//!                                         │        Cache-Control: no-store
//!                                         │
//!                                         └─ other ───▶ DirAssets (built site)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use handbook_edge::config::{resolve_config, Overrides};
use handbook_edge::lifecycle::{wait_for_signal, Shutdown};
use handbook_edge::observability::init_logging;
use handbook_edge::EdgeServer;

#[derive(Parser, Debug)]
#[command(name = "handbook-edge", version)]
#[command(about = "Serve the static handbook and proxy /apps/* to the Dash backend", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "EDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address, e.g. 0.0.0.0:8080
    #[arg(short, long, env = "EDGE_BIND")]
    bind: Option<String>,

    /// Backend origin for /apps/*, e.g. https://mechanical-handbook-dash.onrender.com
    #[arg(long, env = "DASH_BACKEND")]
    backend: Option<String>,

    /// Directory holding the built static site
    #[arg(long, env = "EDGE_ASSETS_DIR")]
    assets: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "EDGE_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            bind_address: self.bind.clone(),
            backend_origin: self.backend.clone(),
            assets_root: self.assets.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("handbook-edge: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(cli.config.as_deref(), &cli.overrides())?;
    init_logging(&config.observability)?;

    tracing::info!("handbook-edge v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.origin,
        assets = %config.assets.root.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    if config.backend.origin.ends_with('/') {
        tracing::warn!(
            backend = %config.backend.origin,
            "Backend origin ends with '/'; proxied paths will contain '//'"
        );
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = EdgeServer::new(config)?;

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        signal_shutdown.trigger();
    });

    server.run(listener, stop).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
