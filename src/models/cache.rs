use crate::api::fetcher::{FetchError, Fetcher};
use bytes::Bytes;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub body: Bytes,
    pub fetched_at: Instant,
}

impl CacheEntry {
    fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }
}

/// A body served by the cache and how long it stays fresh from now.
#[derive(Clone, Debug)]
pub struct Cached {
    pub body: Bytes,
    pub remaining: Duration,
}

/// Time-bounded store of upstream bodies keyed by URL.
///
/// An entry is fresh while `now - fetched_at <= ttl`. Stale entries are
/// never swept and never served; they are simply replaced by the next
/// successful fetch. A failed fetch leaves the store untouched.
pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Serves `url` from the store when fresh, otherwise fetches it once.
    ///
    /// The lock is not held across the fetch, so concurrent misses on the
    /// same key may each hit the upstream.
    pub async fn get_or_fetch<F>(&self, url: &str, fetcher: &F) -> Result<Cached, FetchError>
    where
        F: Fetcher + ?Sized,
    {
        if let Some(cached) = self.lookup(url).await {
            debug!("Cache hit for {}", url);
            return Ok(cached);
        }

        debug!("Cache miss for {}", url);
        let body = fetcher.fetch(url).await?;

        let mut entries = self.entries.lock().await;
        entries.insert(
            url.to_string(),
            CacheEntry {
                body: body.clone(),
                fetched_at: Instant::now(),
            },
        );
        info!("Populating cache for {}", url);

        Ok(Cached {
            body,
            remaining: self.ttl,
        })
    }

    /// Freshness left for `url`, or `None` when absent or stale.
    pub async fn remaining(&self, url: &str) -> Option<Duration> {
        self.lookup(url).await.map(|cached| cached.remaining)
    }

    async fn lookup(&self, url: &str) -> Option<Cached> {
        let entries = self.entries.lock().await;
        let entry = entries.get(url)?;
        let age = entry.age(Instant::now());

        (age <= self.ttl).then(|| Cached {
            body: entry.body.clone(),
            remaining: self.ttl - age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fetcher::mock::ScriptedFetcher;
    use tokio::time::advance;

    const URL: &str = "http://upstream.test/";
    const TTL: Duration = Duration::from_secs(10);

    #[tokio::test(start_paused = true)]
    async fn test_fresh_write_reports_full_ttl() {
        let cache = TtlCache::new(TTL);
        let fetcher = ScriptedFetcher::new().ok("first");

        let cached = cache.get_or_fetch(URL, &fetcher).await.unwrap();

        assert_eq!(cache.ttl(), TTL);
        assert_eq!(cached.body, Bytes::from("first"));
        assert_eq!(cached.remaining, cache.ttl());
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hits_within_ttl_skip_fetch_and_count_down() {
        let cache = TtlCache::new(TTL);
        let fetcher = ScriptedFetcher::new().ok("first");

        let mut previous = cache.get_or_fetch(URL, &fetcher).await.unwrap().remaining;
        for step in [3, 2, 4, 1] {
            advance(Duration::from_secs(step)).await;
            let cached = cache.get_or_fetch(URL, &fetcher).await.unwrap();
            assert!(cached.remaining <= previous);
            previous = cached.remaining;
        }

        // 10s elapsed exactly: still fresh, nothing left
        assert_eq!(previous, Duration::ZERO);
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_triggers_exactly_one_fetch() {
        let cache = TtlCache::new(TTL);
        let fetcher = ScriptedFetcher::new().ok("first").ok("second");

        cache.get_or_fetch(URL, &fetcher).await.unwrap();
        advance(TTL + Duration::from_millis(1)).await;

        let cached = cache.get_or_fetch(URL, &fetcher).await.unwrap();
        assert_eq!(cached.body, Bytes::from("second"));
        assert_eq!(cached.remaining, TTL);
        assert_eq!(fetcher.calls(), 2);

        let again = cache.get_or_fetch(URL, &fetcher).await.unwrap();
        assert_eq!(again.body, Bytes::from("second"));
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refetch_never_serves_stale_body() {
        let cache = TtlCache::new(TTL);
        let fetcher = ScriptedFetcher::new().ok("first").fail(502).ok("third");

        cache.get_or_fetch(URL, &fetcher).await.unwrap();
        advance(TTL * 2).await;

        let result = cache.get_or_fetch(URL, &fetcher).await;
        assert!(matches!(result, Err(FetchError::Status { status: 502, .. })));

        // Failures are not cached: the very next call goes upstream again.
        let cached = cache.get_or_fetch(URL, &fetcher).await.unwrap();
        assert_eq!(cached.body, Bytes::from("third"));
        assert_eq!(fetcher.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_is_none_for_unknown_or_stale_keys() {
        let cache = TtlCache::new(TTL);
        let fetcher = ScriptedFetcher::new().ok("first");

        assert_eq!(cache.remaining(URL).await, None);

        cache.get_or_fetch(URL, &fetcher).await.unwrap();
        advance(Duration::from_secs(4)).await;
        assert_eq!(cache.remaining(URL).await, Some(Duration::from_secs(6)));

        advance(Duration::from_secs(7)).await;
        assert_eq!(cache.remaining(URL).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_cached_independently() {
        let cache = TtlCache::new(TTL);
        let fetcher = ScriptedFetcher::new().ok("a").ok("b");

        let a = cache.get_or_fetch("http://a.test/", &fetcher).await.unwrap();
        let b = cache.get_or_fetch("http://b.test/", &fetcher).await.unwrap();

        assert_eq!(a.body, Bytes::from("a"));
        assert_eq!(b.body, Bytes::from("b"));
        assert_eq!(fetcher.calls(), 2);
    }
}
