use std::path::Path;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health probe plus the compiled site. Unknown paths get `index.html` so
/// the client-side router can render its not-found view.
pub fn router(static_dir: &Path) -> Router {
    let site = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;

    struct SiteDir(PathBuf);

    impl SiteDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("kidsafe-site-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("index.html"), "<html>kidsafe</html>").unwrap();
            std::fs::write(dir.join("styles.css"), "body {}").unwrap();
            Self(dir)
        }
    }

    impl Drop for SiteDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let site = SiteDir::new();
        let (status, body) = get_body(router(&site.0), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn serves_index_and_assets() {
        let site = SiteDir::new();
        let (status, body) = get_body(router(&site.0), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("kidsafe"));

        let (status, body) = get_body(router(&site.0), "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let site = SiteDir::new();
        let (status, body) = get_body(router(&site.0), "/no/such/page").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("kidsafe"));
    }
}
