//! Generation backend implementations.
//!
//! Contains the concrete [`GenerationBackend`] variants and a factory
//! ([`create_backend`]) that builds the one selected by configuration.
//!
//! [`GenerationBackend`]: pagesmith_core::generation::backend::GenerationBackend

pub mod http;
pub mod huggingface;
pub mod openai_compat;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use pagesmith_core::generation::box_backend::BoxGenerationBackend;
use pagesmith_types::config::{BackendKind, GenerationConfig};
use pagesmith_types::error::GenerationError;

use self::huggingface::{HfClientBackend, HfRawBackend};
use self::openai_compat::OpenAiCompatBackend;

/// Settings every backend variant is constructed from.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub model: String,
    /// `None` means the variant's public endpoint.
    pub base_url: Option<String>,
    pub max_new_tokens: u32,
    pub timeout: Duration,
}

impl From<&GenerationConfig> for BackendSettings {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            model: config.resolved_model().to_string(),
            base_url: config.base_url.clone(),
            max_new_tokens: config.max_new_tokens,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Create a [`BoxGenerationBackend`] for the configured variant.
///
/// The credential is checked before anything else: a missing, blank, or
/// header-unsafe key yields [`GenerationError::Configuration`] and no client
/// is built.
pub fn create_backend(
    config: &GenerationConfig,
    api_key: Option<SecretString>,
) -> Result<BoxGenerationBackend, GenerationError> {
    let kind = config.backend;
    let key = validate_api_key(kind, api_key)?;
    let settings = BackendSettings::from(config);

    let backend = match kind {
        BackendKind::HfClient => BoxGenerationBackend::new(HfClientBackend::new(key, settings)?),
        BackendKind::OpenaiCompat => {
            BoxGenerationBackend::new(OpenAiCompatBackend::new(key, settings)?)
        }
        BackendKind::HfRaw => BoxGenerationBackend::new(HfRawBackend::new(key, settings)?),
    };

    tracing::info!(
        backend = backend.name(),
        model = backend.model(),
        timeout_secs = config.timeout_secs,
        "generation backend ready"
    );
    Ok(backend)
}

fn validate_api_key(
    kind: BackendKind,
    api_key: Option<SecretString>,
) -> Result<SecretString, GenerationError> {
    let key = api_key.ok_or_else(|| GenerationError::missing_api_key(&kind.to_string()))?;
    let exposed = key.expose_secret();

    if exposed.trim().is_empty() {
        return Err(GenerationError::missing_api_key(&kind.to_string()));
    }
    if exposed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(GenerationError::Configuration(format!(
            "API Key for '{kind}' contains whitespace or control characters"
        )));
    }

    Ok(key)
}
