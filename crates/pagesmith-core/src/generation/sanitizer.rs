//! Extracts the HTML document from raw backend output.
//!
//! Backends differ in what they wrap around the document: instruct models tend
//! to prepend chatter ("Sure! Here is your page:"), chat APIs tend to wrap the
//! answer in a markdown code fence. Both strategies never fail; input without
//! the expected markers passes through unchanged. No HTML validation or
//! escaping happens here.

use pagesmith_types::generation::SanitizeStrategy;

use super::prompt::DOCTYPE_MARKER;

const OPENING_FENCE: &str = "```html";
const FENCE: &str = "```";

/// Cleans raw backend output according to a fixed strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSanitizer {
    strategy: SanitizeStrategy,
}

impl OutputSanitizer {
    pub fn new(strategy: SanitizeStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SanitizeStrategy {
        self.strategy
    }

    /// Apply the configured strategy. Idempotent.
    pub fn clean(&self, raw: &str) -> String {
        match self.strategy {
            SanitizeStrategy::MarkerScan => marker_scan(raw).to_string(),
            SanitizeStrategy::FenceStrip => fence_strip(raw),
            SanitizeStrategy::Combined => marker_scan(&fence_strip(raw)).to_string(),
        }
    }
}

/// Everything from the first `<!DOCTYPE html>` on, or `raw` if the marker is absent.
pub fn marker_scan(raw: &str) -> &str {
    match raw.find(DOCTYPE_MARKER) {
        Some(start) => &raw[start..],
        None => raw,
    }
}

/// Remove every "```html" and then every remaining "```".
///
/// Left-to-right removal never leaves a new fence behind, so a second pass is
/// a no-op.
pub fn fence_strip(raw: &str) -> String {
    raw.replace(OPENING_FENCE, "").replace(FENCE, "")
}
