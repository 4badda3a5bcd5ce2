//! Topic-to-HTML generation pipeline.
//!
//! - `prompt`: instruction template built from a topic
//! - `backend`: RPITIT trait for concrete generation backends
//! - `box_backend`: object-safe wrapper for runtime backend selection
//! - `sanitizer`: extracts the HTML document from raw backend output
//! - `service`: prompt -> backend -> sanitizer

pub mod backend;
pub mod box_backend;
pub mod prompt;
pub mod sanitizer;
pub mod service;
