use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failed generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or invalid credentials. Never reaches the network.
    ConfigurationError,
    /// Connectivity, DNS, or timeout talking to the provider.
    TransportError,
    /// Provider reachable but returned a failure status or malformed payload.
    ProviderError,
    /// Anything else.
    UnknownError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigurationError => write!(f, "configuration_error"),
            ErrorKind::TransportError => write!(f, "transport_error"),
            ErrorKind::ProviderError => write!(f, "provider_error"),
            ErrorKind::UnknownError => write!(f, "unknown_error"),
        }
    }
}

/// Errors from a generation backend.
///
/// Cloneable so a backend that failed to construct can hand out the same
/// configuration error on every request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Configuration(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("inference error: {0}")]
    Unknown(String),
}

impl GenerationError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Configuration(_) => ErrorKind::ConfigurationError,
            GenerationError::Transport(_) => ErrorKind::TransportError,
            GenerationError::Provider(_) => ErrorKind::ProviderError,
            GenerationError::Unknown(_) => ErrorKind::UnknownError,
        }
    }

    /// The standard error for a backend whose credential is absent or blank.
    pub fn missing_api_key(backend: &str) -> Self {
        GenerationError::Configuration(format!(
            "Inference client not initialized for '{backend}' (API Key missing or invalid)"
        ))
    }
}

/// Errors from site storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("slug '{0}' already exists")]
    DuplicateKey(String),

    #[error("site not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

/// Errors from the publish flow.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("html is required")]
    MissingHtml,

    #[error("could not allocate a unique slug after {0} attempts")]
    SlugExhausted(usize),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
