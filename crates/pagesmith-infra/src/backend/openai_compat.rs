//! `openai-compat` backend: managed provider SDK.
//!
//! Uses [`async_openai`] against any OpenAI-compatible chat completions
//! endpoint (OpenAI, Gemini's compatibility endpoint, Mistral, ...). The
//! prompt goes out as a single user message; the text of the first choice
//! comes back. The SDK's retry loop is disabled: one call is one HTTP attempt.

use std::time::Duration;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use pagesmith_core::generation::backend::GenerationBackend;
use pagesmith_types::error::GenerationError;

use super::BackendSettings;
use super::http::{build_client, classify_reqwest_error};

/// Does not derive Debug: the API key lives inside the SDK client.
pub struct OpenAiCompatBackend {
    client: Client<OpenAIConfig>,
    model: String,
    max_new_tokens: u32,
}

impl OpenAiCompatBackend {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: SecretString, settings: BackendSettings) -> Result<Self, GenerationError> {
        let base_url = settings
            .base_url
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(base_url.trim_end_matches('/'));
        let http = build_client(settings.timeout)?;

        Ok(Self {
            client: Client::build(http, config, single_attempt()),
            model: settings.model,
            max_new_tokens: settings.max_new_tokens,
        })
    }

    fn build_request(&self, prompt: &str) -> CreateChatCompletionRequest {
        let message = ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
            name: None,
        });

        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![message],
            max_completion_tokens: Some(self.max_new_tokens),
            ..Default::default()
        }
    }
}

impl GenerationBackend for OpenAiCompatBackend {
    fn name(&self) -> &str {
        "openai-compat"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .chat()
            .create(self.build_request(prompt))
            .await
            .map_err(map_openai_error)?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::Provider("response contained no text".to_string()))?;

        debug!(chars = text.len(), "openai-compat generation complete");
        Ok(text.trim().to_string())
    }
}

/// Backoff that gives up after the first failure.
fn single_attempt() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..Default::default()
    }
}

/// Map an SDK error onto the generation error taxonomy.
fn map_openai_error(err: OpenAIError) -> GenerationError {
    match &err {
        OpenAIError::ApiError(api_err) => GenerationError::Provider(api_err.message.clone()),
        OpenAIError::Reqwest(reqwest_err) => classify_reqwest_error(reqwest_err),
        OpenAIError::JSONDeserialize(..) => {
            GenerationError::Provider(format!("malformed response: {err}"))
        }
        _ => GenerationError::Unknown(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use async_openai::error::ApiError;
    use pagesmith_types::error::ErrorKind;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn backend(server: &MockServer) -> OpenAiCompatBackend {
        OpenAiCompatBackend::new(
            SecretString::from("sk-test".to_string()),
            BackendSettings {
                model: "gpt-4o-mini".to_string(),
                base_url: Some(server.uri()),
                max_new_tokens: 2048,
                timeout: Duration::from_secs(5),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_build_request_single_user_message() {
        let server_less = OpenAiCompatBackend::new(
            SecretString::from("sk-test".to_string()),
            BackendSettings {
                model: "gpt-4o".to_string(),
                base_url: None,
                max_new_tokens: 512,
                timeout: Duration::from_secs(5),
            },
        )
        .unwrap();

        let req = server_less.build_request("hello");
        assert_eq!(req.model, "gpt-4o");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.max_completion_tokens, Some(512));
        assert!(matches!(
            &req.messages[0],
            ChatCompletionRequestMessage::User(_)
        ));
    }

    #[tokio::test]
    async fn test_generate_reads_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "make a page"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 1_700_000_000,
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "```html\n<!DOCTYPE html><html></html>\n```",
                        "refusal": null
                    },
                    "logprobs": null,
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = backend(&server).generate("make a page").await.unwrap();
        assert_eq!(text, "```html\n<!DOCTYPE html><html></html>\n```");
    }

    #[tokio::test]
    async fn test_generate_api_error_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            })))
            .mount(&server)
            .await;

        let err = backend(&server).generate("p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(err.to_string().contains("Incorrect API key"));
    }

    fn completion(choices: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_700_000_000,
            "model": "gpt-4o-mini",
            "choices": choices,
        })
    }

    #[tokio::test]
    async fn test_generate_server_error_is_single_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let started = std::time::Instant::now();
        let err = backend(&server).generate("p").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(err.to_string().contains("upstream overloaded"));
        assert!(started.elapsed() < Duration::from_secs(2));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_generate_rate_limited_is_single_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {
                    "message": "Rate limit reached",
                    "type": "requests",
                    "param": null,
                    "code": "rate_limit_exceeded"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = backend(&server).generate("p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(err.to_string().contains("Rate limit"));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_generate_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion(serde_json::json!([])))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let backend = OpenAiCompatBackend::new(
            SecretString::from("sk-test".to_string()),
            BackendSettings {
                model: "gpt-4o-mini".to_string(),
                base_url: Some(server.uri()),
                max_new_tokens: 2048,
                timeout: Duration::from_millis(200),
            },
        )
        .unwrap();

        let err = backend.generate("p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportError);
    }

    #[tokio::test]
    async fn test_generate_connection_refused_is_transport_error() {
        let backend = OpenAiCompatBackend::new(
            SecretString::from("sk-test".to_string()),
            BackendSettings {
                model: "gpt-4o-mini".to_string(),
                base_url: Some("http://127.0.0.1:9".to_string()),
                max_new_tokens: 2048,
                timeout: Duration::from_secs(2),
            },
        )
        .unwrap();

        let err = backend.generate("p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportError);
    }

    #[tokio::test]
    async fn test_generate_non_json_body_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = backend(&server).generate("p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderError);
    }

    #[tokio::test]
    async fn test_generate_empty_choices_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion(serde_json::json!([]))),
            )
            .mount(&server)
            .await;

        let err = backend(&server).generate("p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(err.to_string().contains("no text"));
    }

    #[test]
    fn test_single_attempt_backoff_never_retries() {
        use backoff::backoff::Backoff;

        let mut policy = single_attempt();
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(policy.next_backoff(), None);
    }

    #[test]
    fn test_map_openai_error_api_error() {
        let api_err = ApiError {
            message: "model not found".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert_eq!(err.kind(), ErrorKind::ProviderError);
        assert!(err.to_string().contains("model not found"));
    }

    #[test]
    fn test_map_openai_error_invalid_argument_is_unknown() {
        let err = map_openai_error(OpenAIError::InvalidArgument("bad".to_string()));
        assert_eq!(err.kind(), ErrorKind::UnknownError);
    }
}
