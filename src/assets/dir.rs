//! Directory-backed asset bucket.
//!
//! Serves a built MkDocs site: directory paths get their `index.html`,
//! unknown paths get the site's `404.html` when one is configured.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::{BoxFuture, FutureExt};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;

use crate::assets::AssetResolver;
use crate::config::AssetsConfig;

#[derive(Debug, Clone)]
enum Service {
    Plain(ServeDir),
    WithNotFound(ServeDir<SetStatus<ServeFile>>),
}

/// Asset resolver reading files below a root directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
    service: Service,
}

impl DirAssets {
    /// Serve `root` with directory index support and no custom 404 page.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let service = Service::Plain(base_service(&root, false));
        Self { root, service }
    }

    /// Build from configuration.
    ///
    /// The not-found page is used only if it exists on disk at startup.
    pub fn from_config(config: &AssetsConfig) -> Self {
        let root = config.root.clone();
        let base = base_service(&root, config.precompressed);

        let not_found = config
            .not_found_page
            .as_ref()
            .map(|page| root.join(page))
            .filter(|page| {
                let exists = page.is_file();
                if !exists {
                    tracing::warn!(page = %page.display(), "Not-found page missing, using empty 404");
                }
                exists
            });

        let service = match not_found {
            Some(page) => Service::WithNotFound(base.not_found_service(ServeFile::new(page))),
            None => Service::Plain(base),
        };

        tracing::info!(root = %root.display(), "Static assets configured");
        Self { root, service }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn base_service(root: &Path, precompressed: bool) -> ServeDir {
    let dir = ServeDir::new(root).append_index_html_on_directories(true);
    if precompressed {
        dir.precompressed_br().precompressed_gzip()
    } else {
        dir
    }
}

impl AssetResolver for DirAssets {
    fn resolve(&self, request: Request<Body>) -> BoxFuture<'_, Response> {
        let service = self.service.clone();
        async move {
            let result: Result<Response, Infallible> = match service {
                Service::Plain(dir) => dir.oneshot(request).await.map(IntoResponse::into_response),
                Service::WithNotFound(dir) => {
                    dir.oneshot(request).await.map(IntoResponse::into_response)
                }
            };
            match result {
                Ok(response) => response,
                Err(never) => match never {},
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Handbook</h1>").unwrap();
        std::fs::write(dir.path().join("docs/index.html"), "<h1>Docs</h1>").unwrap();
        std::fs::write(dir.path().join("404.html"), "<h1>Missing</h1>").unwrap();
        dir
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_serves_file_and_directory_index() {
        let site = site();
        let assets = DirAssets::new(site.path());

        let response = assets.resolve(get("/docs/index.html")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<h1>Docs</h1>");

        let response = assets.resolve(get("/docs/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<h1>Docs</h1>");
    }

    #[tokio::test]
    async fn test_missing_file_without_page_is_plain_404() {
        let site = site();
        let assets = DirAssets::new(site.path());

        let response = assets.resolve(get("/nope.html")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_file_uses_not_found_page() {
        let site = site();
        let config = AssetsConfig {
            root: site.path().to_path_buf(),
            not_found_page: Some(PathBuf::from("404.html")),
            precompressed: false,
        };
        let assets = DirAssets::from_config(&config);

        let response = assets.resolve(get("/nope.html")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "<h1>Missing</h1>");
    }

    #[tokio::test]
    async fn test_configured_page_absent_on_disk() {
        let site = site();
        std::fs::remove_file(site.path().join("404.html")).unwrap();
        let config = AssetsConfig {
            root: site.path().to_path_buf(),
            not_found_page: Some(PathBuf::from("404.html")),
            precompressed: false,
        };
        let assets = DirAssets::from_config(&config);

        let response = assets.resolve(get("/nope.html")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
