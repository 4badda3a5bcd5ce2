//! GenerationService -- topic in, cleaned HTML out.
//!
//! Holds the backend as a `Result`: a backend that could not be constructed
//! (missing credential, unknown setting) is kept as its configuration error and
//! returned on every call without touching the network.

use tracing::{Instrument, debug, info_span, warn};

use pagesmith_types::error::GenerationError;
use pagesmith_types::generation::GenerationResult;

use super::box_backend::BoxGenerationBackend;
use super::prompt;
use super::sanitizer::OutputSanitizer;

pub struct GenerationService {
    backend: Result<BoxGenerationBackend, GenerationError>,
    sanitizer: OutputSanitizer,
}

impl GenerationService {
    pub fn new(
        backend: Result<BoxGenerationBackend, GenerationError>,
        sanitizer: OutputSanitizer,
    ) -> Self {
        if let Err(e) = &backend {
            warn!(error = %e, "generation backend unavailable; /api/generate will report configuration errors");
        }
        Self { backend, sanitizer }
    }

    /// Whether a backend was constructed successfully.
    pub fn is_ready(&self) -> bool {
        self.backend.is_ok()
    }

    /// Name of the active backend, if any.
    pub fn backend_name(&self) -> Option<&str> {
        self.backend.as_ref().ok().map(|b| b.name())
    }

    /// Build the prompt, call the backend once, and sanitize the output.
    pub async fn generate(&self, topic: &str) -> GenerationResult {
        let backend = self.backend.as_ref().map_err(|e| e.clone())?;
        let prompt = prompt::build(topic);

        let span = info_span!(
            "gen_ai.generate",
            gen_ai.provider.name = backend.name(),
            gen_ai.request.model = backend.model(),
            gen_ai.operation.name = "generate_page",
        );

        let raw = backend.generate(&prompt).instrument(span).await?;
        let html = self.sanitizer.clean(&raw);
        debug!(
            raw_len = raw.len(),
            html_len = html.len(),
            strategy = %self.sanitizer.strategy(),
            "sanitized generation output"
        );
        Ok(html)
    }
}
