//! Hugging Face inference client and the `hf-client` backend built on it.
//!
//! [`InferenceClient`] is a small typed client bound to one model. The
//! backend asks it for a bounded continuation only (`return_full_text =
//! false`), so the prompt is never echoed back.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use pagesmith_core::generation::backend::GenerationBackend;
use pagesmith_types::error::GenerationError;

use super::super::BackendSettings;
use super::super::http::{build_client, classify_reqwest_error, provider_error};
use super::types::{TextGenerationParameters, TextGenerationRequest, TextGenerationResponse};

/// Hugging Face hosted inference client bound to a single model.
///
/// Does not derive Debug: the token must never reach logs.
pub struct InferenceClient {
    http: reqwest::Client,
    token: SecretString,
    base_url: String,
    model: String,
}

impl InferenceClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://router.huggingface.co/hf-inference";

    pub fn new(
        token: SecretString,
        model: String,
        base_url: String,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    /// Run text generation and return the first generated text.
    pub async fn text_generation(
        &self,
        prompt: &str,
        parameters: TextGenerationParameters,
    ) -> Result<String, GenerationError> {
        let body = TextGenerationRequest {
            inputs: prompt,
            parameters: Some(parameters),
            options: None,
        };

        let response = self
            .http
            .post(self.model_url())
            .bearer_auth(self.token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let parsed: TextGenerationResponse =
            response.json().await.map_err(|e| classify_reqwest_error(&e))?;

        parsed
            .into_first_text()
            .ok_or_else(|| GenerationError::Provider("empty result list".to_string()))
    }
}

/// `hf-client` backend: client-library call with a bounded output length.
pub struct HfClientBackend {
    client: InferenceClient,
    max_new_tokens: u32,
}

impl HfClientBackend {
    pub fn new(api_key: SecretString, settings: BackendSettings) -> Result<Self, GenerationError> {
        let http = build_client(settings.timeout)?;
        let base_url = settings
            .base_url
            .unwrap_or_else(|| InferenceClient::DEFAULT_BASE_URL.to_string());
        Ok(Self {
            client: InferenceClient::new(api_key, settings.model, base_url, http),
            max_new_tokens: settings.max_new_tokens,
        })
    }
}

impl GenerationBackend for HfClientBackend {
    fn name(&self) -> &str {
        "hf-client"
    }

    fn model(&self) -> &str {
        self.client.model()
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let parameters = TextGenerationParameters {
            max_new_tokens: self.max_new_tokens,
            return_full_text: false,
        };
        let text = self.client.text_generation(prompt, parameters).await?;
        debug!(chars = text.len(), "hf-client generation complete");
        Ok(text.trim().to_string())
    }
}
