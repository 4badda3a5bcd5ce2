//! Generation request/response types.
//!
//! A generation call turns a topic into a single-file HTML document. The
//! outcome is a plain `Result`: `Ok(html)` on success, or a
//! [`GenerationError`] whose [`kind`](GenerationError::kind) classifies the
//! failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

/// Request body for a generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub topic: String,
}

/// Outcome of a generation call: the cleaned HTML or a typed failure.
pub type GenerationResult = Result<String, GenerationError>;

/// How raw backend output is turned into an HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SanitizeStrategy {
    /// Drop everything before the `<!DOCTYPE html>` marker.
    MarkerScan,
    /// Remove markdown code fences wherever they appear.
    FenceStrip,
    /// Fence-strip, then marker-scan.
    Combined,
}

impl fmt::Display for SanitizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizeStrategy::MarkerScan => write!(f, "marker-scan"),
            SanitizeStrategy::FenceStrip => write!(f, "fence-strip"),
            SanitizeStrategy::Combined => write!(f, "combined"),
        }
    }
}

impl FromStr for SanitizeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "marker-scan" | "marker" => Ok(SanitizeStrategy::MarkerScan),
            "fence-strip" | "fence" => Ok(SanitizeStrategy::FenceStrip),
            "combined" => Ok(SanitizeStrategy::Combined),
            other => Err(format!("invalid sanitize strategy: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_missing_topic_defaults_empty() {
        let req: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.topic, "");
    }

    #[test]
    fn test_sanitize_strategy_roundtrip() {
        for strategy in [
            SanitizeStrategy::MarkerScan,
            SanitizeStrategy::FenceStrip,
            SanitizeStrategy::Combined,
        ] {
            let parsed: SanitizeStrategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_sanitize_strategy_invalid() {
        let result = "regex".parse::<SanitizeStrategy>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("regex"));
    }
}
