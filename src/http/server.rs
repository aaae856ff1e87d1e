//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single catch-all handler
//! - Wire up middleware (in-flight limit, request timeout, tracing)
//! - Build the outbound client and the asset resolver from config
//! - Turn a failed outbound fetch into the generic 502
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::assets::{AssetResolver, DirAssets};
use crate::config::EdgeConfig;
use crate::http::error::{ForwardError, ServerError};
use crate::http::handler::handle;
use crate::http::upstream::{build_client, Backend};
use crate::lifecycle::ShutdownSignal;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
    pub assets: Arc<dyn AssetResolver>,
}

/// HTTP server hosting the edge router.
pub struct EdgeServer {
    router: Router,
    config: EdgeConfig,
}

impl EdgeServer {
    /// Create a server serving assets from `config.assets`.
    pub fn new(config: EdgeConfig) -> Result<Self, ServerError> {
        let assets = Arc::new(DirAssets::from_config(&config.assets));
        Self::with_assets(config, assets)
    }

    /// Create a server with a caller-supplied asset resolver.
    pub fn with_assets(
        config: EdgeConfig,
        assets: Arc<dyn AssetResolver>,
    ) -> Result<Self, ServerError> {
        let client = build_client(&config.timeouts)?;
        let backend = Backend::new(config.backend.origin.clone(), client);

        let state = AppState { backend, assets };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EdgeConfig, state: AppState) -> Router {
        let permits = config.listener.max_connections.min(Semaphore::MAX_PERMITS);
        let limit = Arc::new(Semaphore::new(permits));

        Router::new()
            .fallback(edge_handler)
            .with_state(state)
            .layer(middleware::from_fn_with_state(limit, limit_in_flight))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.origin,
            max_connections = self.config.listener.max_connections,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.triggered().await;
                tracing::info!(
                    address = %addr,
                    "Shutdown signal received, draining in-flight requests"
                );
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EdgeConfig {
        &self.config
    }
}

/// Hold one `max_connections` slot until the response head is produced.
///
/// Requests over the limit wait for a slot (backpressure), bounded by the
/// request timeout.
async fn limit_in_flight(
    State(limit): State<Arc<Semaphore>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Ok(_permit) = limit.acquire_owned().await else {
        // Only reachable if the semaphore were closed
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    next.run(request).await
}

/// Catch-all handler: every method and path goes through `handle`.
async fn edge_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, ForwardError> {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    handle(request, &state.backend, state.assets.as_ref())
        .await
        .inspect_err(|e| {
            tracing::error!(
                method = %method,
                path = %path,
                target = %e.target(),
                error = %e,
                "Upstream error"
            );
        })
}
