//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, Uri};
use axum::response::Response;
use futures_util::future::{BoxFuture, FutureExt};
use tokio::net::TcpListener;

use handbook_edge::config::TimeoutConfig;
use handbook_edge::http::build_client;
use handbook_edge::{AssetResolver, Backend};

/// A request as seen by a mock backend or asset resolver.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Requests captured so far.
#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    pub fn push(&self, recorded: Recorded) {
        self.0.lock().unwrap().push(recorded);
    }

    pub fn all(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn single(&self) -> Recorded {
        let all = self.all();
        assert_eq!(all.len(), 1, "expected exactly one request, got {all:?}");
        all.into_iter().next().unwrap()
    }
}

async fn record(request: Request<Body>) -> Recorded {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    Recorded {
        method: parts.method,
        uri: parts.uri,
        headers: parts.headers,
        body,
    }
}

/// Start a programmable mock backend on an ephemeral port.
///
/// Every request is recorded (body fully read) before `respond` builds the reply.
pub async fn start_programmable_backend<F>(respond: F) -> (SocketAddr, Recorder)
where
    F: Fn(&Recorded) -> Response + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorder = Recorder::default();
    let respond = Arc::new(respond);

    let handler_recorder = recorder.clone();
    let app = axum::Router::new().fallback(move |request: Request<Body>| {
        let recorder = handler_recorder.clone();
        let respond = respond.clone();
        async move {
            let recorded = record(request).await;
            let response = respond(&recorded);
            recorder.push(recorded);
            response
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, recorder)
}

/// Start a mock backend that answers every request with `status` and `body`.
pub async fn start_mock_backend(status: u16, body: &'static str) -> (SocketAddr, Recorder) {
    start_programmable_backend(move |_| respond(status, &[], body)).await
}

/// Build a response with the given status, headers and body.
pub fn respond(status: u16, headers: &[(&str, &str)], body: impl Into<Body>) -> Response {
    let mut builder = Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(body.into()).unwrap()
}

/// An address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Backend pointed at a local mock.
pub fn backend_for(addr: SocketAddr) -> Backend {
    let client = build_client(&TimeoutConfig::default()).unwrap();
    Backend::new(format!("http://{addr}"), client)
}

/// Asset resolver that records what it was given and answers with a fixed page.
#[derive(Debug, Clone, Default)]
pub struct RecordingAssets {
    pub recorder: Recorder,
}

impl AssetResolver for RecordingAssets {
    fn resolve(&self, request: Request<Body>) -> BoxFuture<'_, Response> {
        async move {
            let recorded = record(request).await;
            let body = format!("asset:{}", recorded.uri);
            self.recorder.push(recorded);
            respond(
                203,
                &[("x-asset-source", "bucket"), ("cache-control", "public, max-age=600")],
                body,
            )
        }
        .boxed()
    }
}

pub async fn body_bytes(response: Response) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}
