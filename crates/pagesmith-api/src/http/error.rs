//! Error responses for the site retrieval route.
//!
//! These are HTML, not JSON: the route is opened directly in a browser.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use pagesmith_types::error::StorageError;

pub const NOT_FOUND_HTML: &str =
    "<h1 style='color:red;text-align:center;margin-top:20%'>404 | Site Not Found</h1>";

const INTERNAL_ERROR_HTML: &str =
    "<h1 style='color:red;text-align:center;margin-top:20%'>500 | Something Went Wrong</h1>";

/// Application-level error that maps to an HTML response.
#[derive(Debug)]
pub enum AppError {
    /// Unknown or malformed slug.
    SiteNotFound,
    /// Storage failure while reading a site.
    Storage(StorageError),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound => AppError::SiteNotFound,
            other => AppError::Storage(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::SiteNotFound => (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response(),
            AppError::Storage(e) => {
                tracing::error!(error = %e, "site lookup failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_HTML)).into_response()
            }
        }
    }
}
