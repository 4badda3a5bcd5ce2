//! Backend credential lookup.
//!
//! Credentials come from environment variables only (e.g.
//! `HUGGINGFACE_API_KEY`). They are wrapped in [`SecretString`] immediately
//! and never logged.

use secrecy::SecretString;

use pagesmith_types::config::BackendKind;

/// Read the credential for `kind` from its environment variable.
///
/// Unset, blank, or non-Unicode values all resolve to `None`; the backend
/// factory turns that into a configuration error.
pub fn api_key_from_env(kind: BackendKind) -> Option<SecretString> {
    lookup(kind, |name| std::env::var(name).ok())
}

fn lookup(kind: BackendKind, get: impl Fn(&str) -> Option<String>) -> Option<SecretString> {
    let name = kind.api_key_env();
    match get(name) {
        Some(value) if !value.trim().is_empty() => {
            tracing::debug!(env = name, "backend credential found");
            Some(SecretString::from(value))
        }
        _ => {
            tracing::debug!(env = name, "backend credential not set");
            None
        }
    }
}
