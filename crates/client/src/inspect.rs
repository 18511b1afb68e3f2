//! Site header inspection with caching.
//!
//! Ties the header client, the favicon service, and the shared site cache
//! together: a URL checked within the TTL window is served from the cache,
//! otherwise headers and favicon are fetched and stored as one snapshot.
//!
//! In-flight fetches are not cancelled when the caller goes away; a page torn
//! down mid-check lets the request run to completion. Known resource-leak
//! risk carried over from the original design.

use infotools_core::{CacheEntry, Error, SiteCache};

use crate::favicon::FaviconService;
use crate::fetch::HeaderClient;

/// Result of a header check, with provenance.
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Normalized cache key the snapshot is stored under.
    pub key: String,
    pub entry: CacheEntry,
    /// True when the snapshot came from the cache rather than the network.
    pub from_cache: bool,
}

/// Header/favicon inspection backed by the shared site cache.
pub struct SiteInspector {
    cache: SiteCache,
    client: HeaderClient,
    favicons: FaviconService,
}

impl SiteInspector {
    pub fn new(cache: SiteCache, client: HeaderClient, favicons: FaviconService) -> Self {
        Self { cache, client, favicons }
    }

    pub fn favicons(&self) -> &FaviconService {
        &self.favicons
    }

    /// Check a URL, serving from the cache while the snapshot is fresh.
    ///
    /// On a miss the header fetch must succeed; a non-2xx response or network
    /// failure propagates and nothing is cached. The favicon download is
    /// attempted independently and its outcome, success or failure, is part
    /// of the stored snapshot.
    pub async fn check(&self, url: &url::Url) -> Result<Inspection, Error> {
        let key = SiteCache::normalize_key(url.as_str());

        if let Some(entry) = self.cache.get(&key).await {
            tracing::debug!("cache hit for {}", key);
            return Ok(Inspection { key, entry, from_cache: true });
        }

        let snapshot = self.client.fetch_headers(url.as_str()).await?;
        let favicon = self.favicons.download_favicon(url).await;

        let entry = CacheEntry::new(snapshot.status.as_u16(), snapshot.headers, favicon);
        self.cache.put(&key, entry.clone()).await;

        Ok(Inspection { key, entry, from_cache: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infotools_core::FaviconOutcome;
    use infotools_core::cache::DEFAULT_TTL;
    use crate::fetch::FetchConfig;

    fn inspector() -> SiteInspector {
        SiteInspector::new(
            SiteCache::new(DEFAULT_TTL),
            HeaderClient::new(FetchConfig::default()).unwrap(),
            FaviconService::new().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_check_serves_fresh_entry_from_cache() {
        let inspector = inspector();
        let url = url::Url::parse("https://example.com/page").unwrap();
        let key = SiteCache::normalize_key(url.as_str());

        let entry = CacheEntry::new(
            200,
            vec![("server".to_string(), vec!["nginx".to_string()])],
            FaviconOutcome::Failed("not attempted".to_string()),
        );
        inspector.cache.put(&key, entry).await;

        let inspection = inspector.check(&url).await.unwrap();
        assert!(inspection.from_cache);
        assert_eq!(inspection.key, "https://example.com/page");
        assert_eq!(inspection.entry.status, 200);
    }

    #[tokio::test]
    async fn test_query_string_variants_share_a_snapshot() {
        let inspector = inspector();
        let url = url::Url::parse("https://example.com/page?tab=1").unwrap();
        let key = SiteCache::normalize_key(url.as_str());

        let entry = CacheEntry::new(200, Vec::new(), FaviconOutcome::Failed("not attempted".to_string()));
        inspector.cache.put(&key, entry).await;

        let other = url::Url::parse("https://example.com/page?tab=2").unwrap();
        let inspection = inspector.check(&other).await.unwrap();
        assert!(inspection.from_cache);
    }
}
