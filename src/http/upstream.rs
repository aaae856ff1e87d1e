//! Backend abstraction.
//!
//! # Responsibilities
//! - Hold the configured origin and the outbound HTTP client
//! - Issue exactly one outbound request per proxied call
//! - Follow redirects inside the client, never surfacing them

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use reqwest::redirect::Policy;
use url::Url;

use crate::config::TimeoutConfig;
use crate::http::error::ForwardError;
use crate::http::request::{forwards_body, outbound_headers, target_for_uri};
use crate::http::response::from_upstream;

/// Redirect hops followed before the fetch is reported as failed.
pub const MAX_REDIRECTS: usize = 10;

/// Build the outbound client used for every proxied request.
///
/// Only the connect timeout is set; the total request deadline belongs to
/// the hosting server.
pub fn build_client(timeouts: &TimeoutConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .no_proxy()
        .build()
}

/// The remote application behind `/apps/`.
#[derive(Debug, Clone)]
pub struct Backend {
    origin: Arc<str>,
    client: reqwest::Client,
}

impl Backend {
    /// Create a backend for `origin` (no trailing slash expected).
    pub fn new(origin: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            origin: Arc::from(origin.into()),
            client,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Forward `request` and stream the backend response back.
    pub async fn forward(&self, request: Request<Body>) -> Result<Response, ForwardError> {
        let (parts, body) = request.into_parts();
        let target = target_for_uri(&self.origin, &parts.uri);

        let url = match Url::parse(&target) {
            Ok(url) => url,
            Err(source) => return Err(ForwardError::InvalidTarget { target, source }),
        };

        let with_body = forwards_body(&parts.method);
        let mut outbound = self
            .client
            .request(parts.method.clone(), url)
            .headers(outbound_headers(&parts.headers, with_body));
        if with_body {
            outbound = outbound.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        tracing::debug!(
            method = %parts.method,
            target = %target,
            with_body,
            "Forwarding to backend"
        );

        let upstream = match outbound.send().await {
            Ok(upstream) => upstream,
            Err(source) => return Err(ForwardError::Upstream { target, source }),
        };

        tracing::debug!(
            target = %target,
            status = %upstream.status(),
            final_url = %upstream.url(),
            "Backend responded"
        );

        Ok(from_upstream(upstream))
    }
}
