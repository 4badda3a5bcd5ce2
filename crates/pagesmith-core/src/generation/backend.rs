//! GenerationBackend trait definition.
//!
//! This is the core abstraction every text-generation provider implements.
//! Uses RPITIT for `generate`; see `box_backend` for the object-safe wrapper.

use pagesmith_types::error::GenerationError;

/// Trait for remote text-generation backends (Hugging Face, OpenAI-compatible, ...).
///
/// One `generate` call is one network round trip. Implementations never retry
/// and must map every failure into a [`GenerationError`].
///
/// Implementations live in pagesmith-infra.
pub trait GenerationBackend: Send + Sync {
    /// Short backend identifier (e.g., "hf-client").
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send `prompt` and return the raw generated text.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerationError>> + Send;
}
