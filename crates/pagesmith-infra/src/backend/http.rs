//! Shared reqwest plumbing for the HTTP-based backends.

use std::time::Duration;

use pagesmith_types::error::GenerationError;

/// Longest provider error body carried into an error message.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Build a reqwest client whose every request is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, GenerationError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GenerationError::Unknown(format!("failed to create HTTP client: {e}")))
}

/// Classify a reqwest failure into the generation error taxonomy.
pub fn classify_reqwest_error(err: &reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Transport(format!("request timed out: {err}"))
    } else if err.is_connect() || err.is_request() {
        GenerationError::Transport(format!("HTTP request failed: {err}"))
    } else if err.is_decode() || err.is_body() {
        GenerationError::Provider(format!("malformed response: {err}"))
    } else if let Some(status) = err.status() {
        GenerationError::Provider(format!("HTTP {status}: {err}"))
    } else {
        GenerationError::Unknown(err.to_string())
    }
}

/// Turn a non-2xx response into a provider error, preferring the provider's
/// own `{"error": "..."}` message over the raw body.
pub async fn provider_error(response: reqwest::Response) -> GenerationError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    GenerationError::Provider(format!("HTTP {status}: {}", error_message(&body)))
}

fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|v| match v.get("error") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(obj) => obj.get("message").and_then(|m| m.as_str()).map(str::to_string),
        None => None,
    });

    match message {
        Some(m) => m,
        None => body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}
