//! Request dispatch: the single routing decision of the edge.

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

use crate::assets::AssetResolver;
use crate::http::error::ForwardError;
use crate::http::upstream::Backend;
use crate::routing::Route;

/// Route one request.
///
/// Paths under `/apps/` are forwarded to `backend`; everything else is handed,
/// unchanged, to `assets` and its response returned as-is. A failed outbound
/// fetch is returned as the error, with no retry and no static fallback.
pub async fn handle(
    request: Request<Body>,
    backend: &Backend,
    assets: &dyn AssetResolver,
) -> Result<Response, ForwardError> {
    let route = Route::classify(&request);
    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        route = route.as_str(),
        "Routing request"
    );

    match route {
        Route::Proxy => backend.forward(request).await,
        Route::Static => Ok(assets.resolve(request).await),
    }
}
