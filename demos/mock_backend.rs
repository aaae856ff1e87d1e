//! Stand-in for the Dash backend during local development.
//!
//! ```text
//! cargo run --example mock_backend
//! DASH_BACKEND=http://127.0.0.1:8050 cargo run -- --assets site
//! ```

use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;

async fn ductulator() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "max-age=3600")],
        "<h1>Ductulator</h1>",
    )
}

async fn update_component(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/apps/", get(|| async { "Dash index" }))
        .route("/apps/ductulator", get(ductulator))
        .route("/apps/_dash-update-component", post(update_component));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8050));
    println!("Mock Dash backend listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
