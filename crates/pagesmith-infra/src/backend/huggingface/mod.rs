//! Hugging Face Inference API backends.
//!
//! Two variants share the wire types:
//! - [`HfClientBackend`]: typed client, bounded continuation only
//! - [`HfRawBackend`]: raw POST with `wait_for_model`

pub mod client;
pub mod raw;
pub mod types;

pub use client::{HfClientBackend, InferenceClient};
pub use raw::HfRawBackend;
