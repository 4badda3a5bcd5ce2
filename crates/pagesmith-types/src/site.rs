//! Published site types.

use serde::{Deserialize, Serialize};

/// Title used when a publish request omits one or sends it blank.
pub const DEFAULT_TITLE: &str = "Untitled Project";

/// A published site.
///
/// `slug`, `title`, and `html` are fixed at publish time. Only `views` changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub slug: String,
    pub title: String,
    pub html: String,
    #[serde(default)]
    pub views: i64,
}

impl Site {
    /// Create a fresh, never-viewed site record.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            html: html.into(),
            views: 0,
        }
    }
}

/// Request body for publishing a finished page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

impl PublishRequest {
    /// The title to store, falling back to [`DEFAULT_TITLE`] when absent or blank.
    pub fn effective_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => DEFAULT_TITLE,
        }
    }
}

/// Whether `slug` is non-empty and restricted to `[a-z0-9-]`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_title_defaults() {
        let req = PublishRequest {
            title: None,
            html: Some("<html></html>".into()),
        };
        assert_eq!(req.effective_title(), DEFAULT_TITLE);

        let blank = PublishRequest {
            title: Some("   ".into()),
            html: None,
        };
        assert_eq!(blank.effective_title(), DEFAULT_TITLE);

        let named = PublishRequest {
            title: Some("My Shop".into()),
            html: None,
        };
        assert_eq!(named.effective_title(), "My Shop");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("my-shop-a1b2c3d"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("My-Shop"));
        assert!(!is_valid_slug("my shop"));
        assert!(!is_valid_slug("../etc"));
    }

    #[test]
    fn test_site_new_starts_unviewed() {
        let site = Site::new("a-1234567", "A", "<p>a</p>");
        assert_eq!(site.views, 0);
    }

    #[test]
    fn test_publish_request_deserializes_without_title() {
        let req: PublishRequest = serde_json::from_str(r#"{"html":"<p>x</p>"}"#).unwrap();
        assert!(req.title.is_none());
        assert_eq!(req.html.as_deref(), Some("<p>x</p>"));
    }
}
