//! `POST /api/publish` handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::HOST;
use tracing::{info, warn};
use uuid::Uuid;

use pagesmith_types::site::PublishRequest;

use crate::http::response::PublishResponse;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
use crate::state::AppState;

/// Store the submitted HTML under a fresh slug and return its public URL.
pub async fn publish_site(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<PublishRequest>, JsonRejection>,
) -> PublishResponse {
    let request_id = Uuid::now_v7();

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%request_id, error = %rejection, "rejected publish request body");
            return PublishResponse::Error {
                message: rejection.body_text(),
            };
        }
    };

    match state.publish_service.publish(&request).await {
        Ok(site) => {
            let base = public_base_url(state.config.server.public_url.as_deref(), &headers);
            info!(%request_id, slug = %site.slug, "publish succeeded");
            PublishResponse::Success {
                url: format!("{base}/s/{}", site.slug),
            }
        }
        Err(e) => {
            warn!(%request_id, error = %e, "publish failed");
            PublishResponse::Error {
                message: e.to_string(),
            }
        }
    }
}

/// Base URL for published links: configured public URL, else `{scheme}://{Host}`.
///
/// The scheme comes from `X-Forwarded-Proto` (first hop) when it is `http` or
/// `https`, and defaults to `http`. Empty when no host is known, leaving a
/// root-relative link.
pub fn public_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(url) = configured.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .map(|host| format!("{}://{host}", forwarded_scheme(headers)))
        .unwrap_or_default()
}

fn forwarded_scheme(headers: &HeaderMap) -> &'static str {
    let proto = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase());

    match proto.as_deref() {
        Some("https") => "https",
        _ => "http",
    }
}
