//! In-memory cache of site header/favicon snapshots.
//!
//! Entries are keyed by normalized URL and valid for a fixed TTL from capture
//! time. Expiry is lazy: a stale entry behaves as a miss on read and stays in
//! the map until the next `put` overwrites it. A refresh always replaces the
//! whole snapshot (headers, favicon bytes, favicon status) at once.
//!
//! The map is shared behind a tokio `RwLock`; concurrent refreshes of the
//! same key are last-write-wins, with no ordering guarantee beyond whichever
//! fetch completes last.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use tokio::sync::RwLock;

/// Default validity window for a cached snapshot (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Outcome of the favicon download bundled into a snapshot.
#[derive(Debug, Clone)]
pub enum FaviconOutcome {
    /// Icon bytes fetched successfully.
    Fetched(Bytes),
    /// Download failed; carries the status message shown to the user.
    Failed(String),
}

impl FaviconOutcome {
    pub fn bytes(&self) -> Option<&Bytes> {
        match self {
            FaviconOutcome::Fetched(data) => Some(data),
            FaviconOutcome::Failed(_) => None,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, FaviconOutcome::Fetched(_))
    }
}

/// One cached snapshot: headers and favicon outcome captured together.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    captured_at: Instant,
    /// HTTP status of the header fetch. Always 2xx: error responses are
    /// propagated to the caller and never stored.
    pub status: u16,
    /// Header lines in wire order; repeated keys keep their value order.
    pub headers: Vec<(String, Vec<String>)>,
    pub favicon: FaviconOutcome,
}

impl CacheEntry {
    pub fn new(status: u16, headers: Vec<(String, Vec<String>)>, favicon: FaviconOutcome) -> Self {
        Self { captured_at: Instant::now(), status, headers, favicon }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.captured_at.elapsed() >= ttl
    }
}

/// Time-bounded cache of site snapshots, shared across pages.
#[derive(Clone)]
pub struct SiteCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl SiteCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entries: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Normalize a URL into a cache key.
    ///
    /// A well-formed absolute URL becomes `scheme://host<path>` with scheme
    /// and host lowercased and path case preserved. The fragment is dropped
    /// and the query string is NOT included, so two URLs differing only in
    /// query string share one key. Anything unparsable falls back to the
    /// lowercased raw string.
    pub fn normalize_key(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url)
            && let Some(host) = parsed.host_str()
        {
            // The url crate lowercases scheme and host during parsing.
            return format!("{}://{}{}", parsed.scheme(), host, parsed.path());
        }
        url.to_lowercase()
    }

    /// Fetch a snapshot, treating anything older than the TTL as a miss.
    pub async fn get(&self, key: &str) -> Option<CacheEntry> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => Some(entry.clone()),
            Some(_) => {
                tracing::debug!("cache entry for {} expired", key);
                None
            }
            None => None,
        }
    }

    /// Store a snapshot, overwriting any prior entry and restamping it.
    pub async fn put(&self, key: &str, mut entry: CacheEntry) {
        entry.captured_at = Instant::now();
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), entry);
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> CacheEntry {
        CacheEntry::new(
            200,
            vec![("server".to_string(), vec!["nginx".to_string()])],
            FaviconOutcome::Failed("not attempted".to_string()),
        )
    }

    #[tokio::test]
    async fn test_get_after_put_returns_entry() {
        let cache = SiteCache::new(DEFAULT_TTL);
        cache.put("https://example.com/", entry()).await;

        let got = cache.get("https://example.com/").await.unwrap();
        assert_eq!(got.status, 200);
        assert_eq!(got.headers[0].0, "server");
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = SiteCache::new(DEFAULT_TTL);
        let mut stale = entry();
        stale.captured_at = Instant::now() - DEFAULT_TTL - Duration::from_secs(1);
        cache.entries.write().await.insert("key".to_string(), stale);

        assert!(cache.get("key").await.is_none());
        // Lazy expiry: the stale entry is still in the map.
        assert!(cache.entries.read().await.contains_key("key"));
    }

    #[tokio::test]
    async fn test_put_overwrites_and_restamps() {
        let cache = SiteCache::new(DEFAULT_TTL);
        let mut stale = entry();
        stale.captured_at = Instant::now() - DEFAULT_TTL - Duration::from_secs(1);
        cache.entries.write().await.insert("key".to_string(), stale);

        cache.put("key", entry()).await;
        assert!(cache.get("key").await.is_some());
    }

    #[test]
    fn test_normalize_lowercases_scheme_and_host() {
        let key = SiteCache::normalize_key("HTTPS://Example.COM/Path");
        assert_eq!(key, "https://example.com/Path");
    }

    #[test]
    fn test_normalize_drops_query_and_fragment() {
        let a = SiteCache::normalize_key("https://example.com/page?tab=1");
        let b = SiteCache::normalize_key("https://example.com/page?tab=2");
        let c = SiteCache::normalize_key("https://example.com/page#section");
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, "https://example.com/page");
    }

    #[test]
    fn test_normalize_unparsable_falls_back_to_lowercase() {
        assert_eq!(SiteCache::normalize_key("Not A Url"), "not a url");
    }
}
