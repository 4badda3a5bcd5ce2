//! Site store trait.
//!
//! Defines the interface for durable, slug-keyed site persistence.
//! Implementations live in pagesmith-infra.

use pagesmith_types::error::StorageError;
use pagesmith_types::site::Site;

/// Durable storage for published sites.
///
/// Records are insert-only: `title` and `html` never change after `put`, and
/// there is no delete. The only mutation is the view counter.
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait SiteStore: Send + Sync {
    /// Insert a new site. Fails with [`StorageError::DuplicateKey`] if the slug
    /// is taken; the existing record is left untouched.
    fn put(&self, site: &Site) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Look up a site by slug. Does not touch the view counter.
    fn get(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<Site>, StorageError>> + Send;

    /// Increment the view counter. Fails with [`StorageError::NotFound`] for
    /// an unknown slug.
    fn record_view(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
