//! In-band response envelopes for the JSON endpoints.
//!
//! Both endpoints always answer HTTP 200 and signal the outcome in `status`:
//! ```json
//! { "status": "success", "code": "<!DOCTYPE html>..." }
//! { "status": "success", "url": "https://host/s/my-shop-k3j9x0a" }
//! { "status": "error", "message": "..." }
//! ```

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Response body of `POST /api/generate`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerateResponse {
    Success { code: String },
    Error { message: String },
}

/// Response body of `POST /api/publish`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PublishResponse {
    Success { url: String },
    Error { message: String },
}

impl IntoResponse for GenerateResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for PublishResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn generate_success_shape() {
        let value = serde_json::to_value(GenerateResponse::Success {
            code: "<p>x</p>".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({"status": "success", "code": "<p>x</p>"}));
    }

    #[test]
    fn publish_error_shape() {
        let value = serde_json::to_value(PublishResponse::Error {
            message: "html is required".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({"status": "error", "message": "html is required"}));
    }
}
