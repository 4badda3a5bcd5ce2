//! Global configuration loader for Pagesmith.
//!
//! Reads `config.toml` from the data directory (`~/.pagesmith/` by default)
//! and deserializes it into [`GlobalConfig`], then applies `PAGESMITH_*`
//! environment overrides. Falls back to defaults when the file is missing or
//! malformed; invalid override values are logged and skipped. Zero
//! `timeout_secs` or `max_new_tokens` from the file is replaced by the default.

use std::path::{Path, PathBuf};

use pagesmith_types::config::{DEFAULT_MAX_NEW_TOKENS, DEFAULT_TIMEOUT_SECS, GlobalConfig};

/// Resolve the data directory: `PAGESMITH_DATA_DIR`, else `~/.pagesmith`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PAGESMITH_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pagesmith")
}

/// Load configuration from `{data_dir}/config.toml` plus process environment.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let mut config = load_config_file(data_dir).await;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    config
}

/// Load `{data_dir}/config.toml` only.
///
/// - Missing file: [`GlobalConfig::default()`].
/// - Unreadable or unparsable file: logs a warning, returns the default.
pub async fn load_config_file(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(mut config) => {
            enforce_minimums(&mut config);
            config
        }
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Replace non-positive limits with their defaults.
pub fn enforce_minimums(config: &mut GlobalConfig) {
    let generation = &mut config.generation;

    if generation.timeout_secs == 0 {
        tracing::warn!(
            "Ignoring timeout_secs = 0: timeout must be positive, using {DEFAULT_TIMEOUT_SECS}"
        );
        generation.timeout_secs = DEFAULT_TIMEOUT_SECS;
    }
    if generation.max_new_tokens == 0 {
        tracing::warn!(
            "Ignoring max_new_tokens = 0: must be positive, using {DEFAULT_MAX_NEW_TOKENS}"
        );
        generation.max_new_tokens = DEFAULT_MAX_NEW_TOKENS;
    }
}

/// Apply `PAGESMITH_*` overrides read through `get`.
pub fn apply_env_overrides(config: &mut GlobalConfig, get: impl Fn(&str) -> Option<String>) {
    let generation = &mut config.generation;

    if let Some(v) = get("PAGESMITH_BACKEND") {
        match v.parse() {
            Ok(kind) => generation.backend = kind,
            Err(e) => tracing::warn!("Ignoring PAGESMITH_BACKEND: {e}"),
        }
    }
    if let Some(v) = get("PAGESMITH_MODEL") {
        generation.model = Some(v);
    }
    if let Some(v) = get("PAGESMITH_BASE_URL") {
        generation.base_url = Some(v);
    }
    if let Some(v) = get("PAGESMITH_MAX_NEW_TOKENS") {
        match v.parse() {
            Ok(n) if n > 0 => generation.max_new_tokens = n,
            Ok(_) => tracing::warn!("Ignoring PAGESMITH_MAX_NEW_TOKENS=0: must be positive"),
            Err(e) => tracing::warn!("Ignoring PAGESMITH_MAX_NEW_TOKENS='{v}': {e}"),
        }
    }
    if let Some(v) = get("PAGESMITH_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(n) if n > 0 => generation.timeout_secs = n,
            Ok(_) => tracing::warn!("Ignoring PAGESMITH_TIMEOUT_SECS=0: timeout must be positive"),
            Err(e) => tracing::warn!("Ignoring PAGESMITH_TIMEOUT_SECS='{v}': {e}"),
        }
    }
    if let Some(v) = get("PAGESMITH_SANITIZER") {
        match v.parse() {
            Ok(strategy) => generation.sanitizer = Some(strategy),
            Err(e) => tracing::warn!("Ignoring PAGESMITH_SANITIZER: {e}"),
        }
    }

    if let Some(v) = get("PAGESMITH_PUBLIC_URL") {
        config.server.public_url = Some(v);
    }
    if let Some(v) = get("PAGESMITH_WEB_DIR") {
        config.server.web_dir = Some(v);
    }
}
