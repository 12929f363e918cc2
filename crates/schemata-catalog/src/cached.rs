//! Memoized catalog loading.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use schemata_core::entities::CatalogEntry;

use crate::cache::{Clock, TtlCache};
use crate::client::CatalogClient;
use crate::error::CatalogError;

/// Loaded catalog, shared between every request that reads it.
pub type SharedCatalog = Arc<[CatalogEntry]>;

/// Anything that can hand out the current catalog.
pub trait CatalogSource: Send + Sync {
    fn schemas(&self) -> BoxFuture<'_, Result<SharedCatalog, CatalogError>>;
}

/// Catalog fetched from a URL and reused for `ttl`.
///
/// Only successful responses are cached; a failed fetch is retried by the
/// next caller.
#[derive(Debug)]
pub struct CachedCatalog {
    client: CatalogClient,
    url: String,
    cache: TtlCache<String, SharedCatalog>,
}

impl CachedCatalog {
    #[must_use]
    pub fn new(client: CatalogClient, url: impl Into<String>, ttl: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            cache: TtlCache::new(ttl),
        }
    }

    #[must_use]
    pub fn with_clock(
        client: CatalogClient,
        url: impl Into<String>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            cache: TtlCache::with_clock(ttl, clock),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Cached catalog, fetching it when absent or expired.
    ///
    /// # Errors
    ///
    /// Propagates the [`CatalogError`] of the underlying fetch.
    pub async fn load(&self) -> Result<SharedCatalog, CatalogError> {
        if let Some(hit) = self.cache.get(&self.url) {
            tracing::debug!(url = %self.url, entries = hit.len(), "catalog cache hit");
            return Ok(hit);
        }

        tracing::debug!(url = %self.url, "catalog cache miss, fetching");
        let entries = self.client.fetch(&self.url).await.inspect_err(|error| {
            tracing::warn!(url = %self.url, %error, "catalog fetch failed");
        })?;

        let shared: SharedCatalog = entries.into();
        tracing::info!(url = %self.url, entries = shared.len(), "catalog loaded");
        self.cache.insert(self.url.clone(), Arc::clone(&shared));
        Ok(shared)
    }

    /// Forget the cached response. Returns whether one was present.
    pub fn invalidate(&self) -> bool {
        self.cache.invalidate(&self.url)
    }
}

impl CatalogSource for CachedCatalog {
    fn schemas(&self) -> BoxFuture<'_, Result<SharedCatalog, CatalogError>> {
        Box::pin(self.load())
    }
}

/// Fixed catalog, for hosts that ship the registry with their deployment.
#[derive(Debug, Clone)]
pub struct StaticCatalog(SharedCatalog);

impl StaticCatalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self(entries.into())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogSource for StaticCatalog {
    fn schemas(&self) -> BoxFuture<'_, Result<SharedCatalog, CatalogError>> {
        Box::pin(futures::future::ready(Ok(Arc::clone(&self.0))))
    }
}
