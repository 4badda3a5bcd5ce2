//! Business logic for Pagesmith.
//!
//! - [`generation`]: prompt construction, the `GenerationBackend` trait and its
//!   boxed wrapper, output sanitization, and the `GenerationService` that ties
//!   them together.
//! - [`site`]: slug allocation, the `SiteStore` trait, and the `PublishService`.
//!
//! Concrete backends and the SQLite store live in `pagesmith-infra`.

pub mod generation;
pub mod site;
