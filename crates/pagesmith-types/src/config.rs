//! Global configuration types for Pagesmith.
//!
//! `GlobalConfig` represents the optional `config.toml` in the data directory.
//! Every field has a default so an empty or missing file is valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::generation::SanitizeStrategy;

/// Default Hugging Face model for the `hf-client` and `hf-raw` backends.
pub const DEFAULT_HF_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Default model for the `openai-compat` backend.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Which generation backend variant serves `/api/generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Hugging Face text-generation client (`max_new_tokens`, `return_full_text = false`).
    #[default]
    HfClient,
    /// OpenAI-compatible chat completions SDK.
    OpenaiCompat,
    /// Raw authenticated POST to a Hugging Face inference endpoint.
    HfRaw,
}

impl BackendKind {
    /// Environment variable holding this backend's credential.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            BackendKind::HfClient | BackendKind::HfRaw => "HUGGINGFACE_API_KEY",
            BackendKind::OpenaiCompat => "OPENAI_API_KEY",
        }
    }

    /// Model used when the configuration does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            BackendKind::HfClient | BackendKind::HfRaw => DEFAULT_HF_MODEL,
            BackendKind::OpenaiCompat => DEFAULT_OPENAI_MODEL,
        }
    }

    /// Sanitizer strategy matching what this backend tends to emit.
    pub fn default_sanitizer(&self) -> SanitizeStrategy {
        match self {
            BackendKind::HfClient | BackendKind::HfRaw => SanitizeStrategy::MarkerScan,
            BackendKind::OpenaiCompat => SanitizeStrategy::FenceStrip,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::HfClient => write!(f, "hf-client"),
            BackendKind::OpenaiCompat => write!(f, "openai-compat"),
            BackendKind::HfRaw => write!(f, "hf-raw"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hf-client" | "huggingface" => Ok(BackendKind::HfClient),
            "openai-compat" | "openai" => Ok(BackendKind::OpenaiCompat),
            "hf-raw" => Ok(BackendKind::HfRaw),
            other => Err(format!("invalid backend: '{other}'")),
        }
    }
}

/// Generation backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub backend: BackendKind,

    /// Model identifier; `None` means the backend default.
    #[serde(default)]
    pub model: Option<String>,

    /// Endpoint base URL override (proxies, self-hosted endpoints, tests).
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Upper bound on a single outbound generation call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Force a sanitizer strategy instead of the backend default.
    #[serde(default)]
    pub sanitizer: Option<SanitizeStrategy>,
}

pub const DEFAULT_MAX_NEW_TOKENS: u32 = 2048;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

fn default_max_new_tokens() -> u32 {
    DEFAULT_MAX_NEW_TOKENS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            model: None,
            base_url: None,
            max_new_tokens: default_max_new_tokens(),
            timeout_secs: default_timeout_secs(),
            sanitizer: None,
        }
    }
}

impl GenerationConfig {
    /// Configured model, or the backend's default.
    pub fn resolved_model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.backend.default_model())
    }

    /// Configured sanitizer, or the backend's default.
    pub fn resolved_sanitizer(&self) -> SanitizeStrategy {
        self.sanitizer
            .unwrap_or_else(|| self.backend.default_sanitizer())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base used to build published URLs (e.g. `https://pages.example.com`).
    /// When unset, the request's `Host` header is used.
    #[serde(default)]
    pub public_url: Option<String>,

    /// Directory of static front-end assets served at `/`.
    #[serde(default)]
    pub web_dir: Option<String>,
}

/// Top-level configuration for Pagesmith.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.generation.backend, BackendKind::HfClient);
        assert_eq!(config.generation.max_new_tokens, 2048);
        assert_eq!(config.generation.timeout_secs, 120);
        assert_eq!(config.generation.resolved_model(), DEFAULT_HF_MODEL);
        assert_eq!(
            config.generation.resolved_sanitizer(),
            SanitizeStrategy::MarkerScan
        );
        assert!(config.server.public_url.is_none());
    }

    #[test]
    fn test_global_config_from_toml() {
        let toml_str = r#"
[generation]
backend = "openai-compat"
model = "gpt-4o"
timeout_secs = 30

[server]
public_url = "https://pages.example.com"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.backend, BackendKind::OpenaiCompat);
        assert_eq!(config.generation.resolved_model(), "gpt-4o");
        assert_eq!(config.generation.timeout_secs, 30);
        assert_eq!(config.generation.max_new_tokens, 2048);
        assert_eq!(
            config.generation.resolved_sanitizer(),
            SanitizeStrategy::FenceStrip
        );
        assert_eq!(
            config.server.public_url.as_deref(),
            Some("https://pages.example.com")
        );
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.generation.backend, BackendKind::HfClient);
    }

    #[test]
    fn test_sanitizer_override_wins() {
        let config = GenerationConfig {
            sanitizer: Some(SanitizeStrategy::Combined),
            ..Default::default()
        };
        assert_eq!(config.resolved_sanitizer(), SanitizeStrategy::Combined);
    }

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("hf-raw".parse::<BackendKind>().unwrap(), BackendKind::HfRaw);
        assert_eq!(
            "OpenAI".parse::<BackendKind>().unwrap(),
            BackendKind::OpenaiCompat
        );
        assert!("gemini-sdk".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_backend_api_key_env() {
        assert_eq!(BackendKind::HfClient.api_key_env(), "HUGGINGFACE_API_KEY");
        assert_eq!(BackendKind::OpenaiCompat.api_key_env(), "OPENAI_API_KEY");
    }
}
