//! `hf-raw` backend: a direct authenticated POST to an inference endpoint.
//!
//! Sends `options.wait_for_model = true` so a cold model is loaded instead of
//! answering 503, treats every non-2xx status as a hard failure, and reads
//! `generated_text` from the first element of the result list. The endpoint
//! echoes the prompt by default; the echo is stripped before returning.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use pagesmith_core::generation::backend::GenerationBackend;
use pagesmith_types::error::GenerationError;

use super::super::BackendSettings;
use super::super::http::{build_client, classify_reqwest_error, provider_error};
use super::types::{InferenceOptions, TextGenerationRequest, TextGenerationResponse};

pub struct HfRawBackend {
    http: reqwest::Client,
    api_key: SecretString,
    endpoint: String,
    model: String,
}

impl HfRawBackend {
    pub const DEFAULT_BASE_URL: &'static str = "https://api-inference.huggingface.co";

    pub fn new(api_key: SecretString, settings: BackendSettings) -> Result<Self, GenerationError> {
        let base_url = settings
            .base_url
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        let endpoint = format!("{}/models/{}", base_url.trim_end_matches('/'), settings.model);

        Ok(Self {
            http: build_client(settings.timeout)?,
            api_key,
            endpoint,
            model: settings.model,
        })
    }
}

impl GenerationBackend for HfRawBackend {
    fn name(&self) -> &str {
        "hf-raw"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = TextGenerationRequest {
            inputs: prompt,
            parameters: None,
            options: Some(InferenceOptions {
                wait_for_model: true,
            }),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let parsed: TextGenerationResponse =
            response.json().await.map_err(|e| classify_reqwest_error(&e))?;
        let text = parsed
            .into_first_text()
            .ok_or_else(|| GenerationError::Provider("empty result list".to_string()))?;

        let continuation = text.strip_prefix(prompt).unwrap_or(&text);
        debug!(
            chars = continuation.len(),
            echoed = continuation.len() != text.len(),
            "hf-raw generation complete"
        );
        Ok(continuation.trim().to_string())
    }
}
