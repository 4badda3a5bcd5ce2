//! Axum router configuration with middleware.
//!
//! Routes: `/api/generate`, `/api/publish`, `/s/{slug}`, `/health`, `/`.
//! Middleware: CORS, tracing.
//!
//! When `server.web_dir` points at an existing directory, it is served as the
//! fallback (front-end editor build) and replaces the built-in `/` page.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/generate", post(handlers::generate::generate_page))
        .route("/api/publish", post(handlers::publish::publish_site))
        .route("/s/{slug}", get(handlers::site::serve_site))
        .route("/health", get(health_check));

    let web_dir = state
        .config
        .server
        .web_dir
        .clone()
        .filter(|dir| Path::new(dir).is_dir());
    match web_dir {
        Some(dir) => {
            tracing::info!(path = %dir, "static web directory serving enabled");
            router = router.fallback_service(ServeDir::new(dir));
        }
        None => {
            router = router.route("/", get(handlers::index::index_page));
        }
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use pagesmith_infra::sqlite::pool::DatabasePool;
    use pagesmith_types::config::{GlobalConfig, ServerConfig};
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use super::*;

    async fn spawn_app(config: GlobalConfig) -> (String, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::open(&dir.path().join("test.db")).await.unwrap();
        let state = AppState::from_parts(config, dir.path().to_path_buf(), pool, None);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });

        (format!("http://{addr}"), dir)
    }

    fn with_public_url(url: &str) -> GlobalConfig {
        GlobalConfig {
            server: ServerConfig {
                public_url: Some(url.to_string()),
                web_dir: None,
            },
            ..Default::default()
        }
    }

    fn is_slug_suffix(s: &str) -> bool {
        s.len() == 7
            && s
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }

    #[tokio::test]
    async fn publish_then_view_round_trip() {
        let (base, _dir) = spawn_app(with_public_url("https://host")).await;
        let client = reqwest::Client::new();

        let body: Value = client
            .post(format!("{base}/api/publish"))
            .json(&json!({"title": "My Shop", "html": "<html>hi</html>"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "success");
        let url = body["url"].as_str().unwrap();
        let suffix = url.strip_prefix("https://host/s/my-shop-").unwrap();
        assert!(is_slug_suffix(suffix), "unexpected url: {url}");

        let path = url.strip_prefix("https://host").unwrap();
        let response = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), 200);
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert_eq!(response.text().await.unwrap(), "<html>hi</html>");
    }

    #[tokio::test]
    async fn publish_uses_host_header_without_public_url() {
        let (base, _dir) = spawn_app(GlobalConfig::default()).await;

        let body: Value = reqwest::Client::new()
            .post(format!("{base}/api/publish"))
            .json(&json!({"html": "<p>x</p>"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with(&format!("{base}/s/untitled-project-")), "{url}");
    }

    #[tokio::test]
    async fn publish_without_html_is_in_band_error() {
        let (base, _dir) = spawn_app(GlobalConfig::default()).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/publish"))
            .json(&json!({"title": "Empty"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "html is required");
    }

    #[tokio::test]
    async fn unknown_slug_is_404() {
        let (base, _dir) = spawn_app(GlobalConfig::default()).await;

        for path in ["/s/does-not-exist", "/s/UPPER_case"] {
            let response = reqwest::get(format!("{base}{path}")).await.unwrap();
            assert_eq!(response.status(), 404);
            assert!(response.text().await.unwrap().contains("Site Not Found"));
        }
    }

    #[tokio::test]
    async fn generate_without_credentials_reports_api_key() {
        let (base, _dir) = spawn_app(GlobalConfig::default()).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/generate"))
            .json(&json!({"topic": "bakery"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("API Key"));
    }

    #[tokio::test]
    async fn generate_with_malformed_body_is_in_band_error() {
        let (base, _dir) = spawn_app(GlobalConfig::default()).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/generate"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn health_and_index() {
        let (base, _dir) = spawn_app(GlobalConfig::default()).await;

        let health: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "ok");

        let index = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(index.status(), 200);
        assert!(index.text().await.unwrap().contains("/api/generate"));
    }
}
