//! PublishService -- slug allocation, persistence, and retrieval of sites.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use pagesmith_types::error::{PublishError, StorageError};
use pagesmith_types::site::{PublishRequest, Site, is_valid_slug};

use super::slug;
use super::store::SiteStore;

/// Fresh slugs tried before a publish gives up on duplicate keys.
pub const MAX_SLUG_ATTEMPTS: usize = 3;

pub struct PublishService<S: SiteStore> {
    store: S,
}

impl<S: SiteStore> PublishService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Publish with an OS-seeded random source.
    pub async fn publish(&self, request: &PublishRequest) -> Result<Site, PublishError> {
        let mut rng = StdRng::from_os_rng();
        self.publish_with_rng(request, &mut rng).await
    }

    /// Allocate a slug from `rng`, then insert.
    ///
    /// The store's unique key is the only collision check. On
    /// [`StorageError::DuplicateKey`] a new slug is drawn, up to
    /// [`MAX_SLUG_ATTEMPTS`] times.
    pub async fn publish_with_rng<R: Rng + Send>(
        &self,
        request: &PublishRequest,
        rng: &mut R,
    ) -> Result<Site, PublishError> {
        let html = request.html.as_deref().ok_or(PublishError::MissingHtml)?;
        let title = request.effective_title();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let site = Site::new(slug::allocate(title, rng), title, html);
            match self.store.put(&site).await {
                Ok(()) => {
                    info!(slug = %site.slug, bytes = html.len(), "site published");
                    return Ok(site);
                }
                Err(StorageError::DuplicateKey(slug)) => {
                    warn!(%slug, attempt, "slug collision, drawing a new one");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(PublishError::SlugExhausted(MAX_SLUG_ATTEMPTS))
    }

    /// Fetch a site for display and count the view.
    ///
    /// A failed counter update is logged and does not fail the view.
    pub async fn view(&self, slug: &str) -> Result<Site, StorageError> {
        if !is_valid_slug(slug) {
            return Err(StorageError::NotFound);
        }

        let mut site = self.store.get(slug).await?.ok_or(StorageError::NotFound)?;

        match self.store.record_view(slug).await {
            Ok(()) => site.views += 1,
            Err(e) => warn!(%slug, error = %e, "failed to record view"),
        }

        Ok(site)
    }

    /// Fetch a site without counting a view.
    pub async fn get(&self, slug: &str) -> Result<Option<Site>, StorageError> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }
        self.store.get(slug).await
    }
}
