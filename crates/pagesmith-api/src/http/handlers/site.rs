//! `GET /s/{slug}` handler.

use axum::extract::{Path, State};
use axum::response::Html;

use crate::http::error::AppError;
use crate::state::AppState;

/// Serve the stored HTML exactly as published.
pub async fn serve_site(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let site = state.publish_service.view(&slug).await?;
    tracing::debug!(%slug, views = site.views, "site served");
    Ok(Html(site.html))
}
