//! Cache-aware HTTP fetching for armory pages.
//!
//! Every fetch goes through the same pipeline: consult the [`CacheStore`]
//! first, hit the network only when the cached copy is missing or stale, and
//! write whatever the network produced back to the cache.
//!
//! The upstream occasionally answers a request with `200 OK` and an empty
//! body instead of an error. An empty body is therefore re-requested up to
//! [`FetchPolicy::max_retries`](crate::FetchPolicy) times, sleeping
//! [`FetchPolicy::retry_backoff`](crate::FetchPolicy) between attempts.
//! Transport failures and non-success statuses are *not* retried here; they
//! surface as [`Error::Network`] immediately.
//!
//! Note the documented sharp edge: if the body is still empty once the retry
//! budget is exhausted, the empty content is accepted, cached, and returned.
//! Until that entry expires, callers will be served the empty page from
//! cache. Preserving this behavior (rather than refusing to cache) is a
//! deliberate product decision; see DESIGN.md.

use crate::cache::{CacheStore, Freshness};
use crate::config::FetchPolicy;
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// HTTP client that resolves URLs to page content, cache first.
pub struct Fetcher {
    client: Client,
    cache: CacheStore,
    policy: FetchPolicy,
}

impl Fetcher {
    /// Creates a fetcher over the given cache with a 30 second request timeout.
    pub fn new(cache: CacheStore, policy: FetchPolicy) -> Result<Self> {
        Self::with_timeout(cache, policy, Duration::from_secs(30))
    }

    /// Creates a fetcher with a custom request timeout (primarily for tests).
    pub fn with_timeout(cache: CacheStore, policy: FetchPolicy, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("armory/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            cache,
            policy,
        })
    }

    /// The policy this fetcher applies.
    #[must_use]
    pub const fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// The cache backing this fetcher.
    #[must_use]
    pub const fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Resolve `url` to page content, serving from cache when `key` is fresh.
    ///
    /// Whatever the network returns, including a body that is still empty
    /// after the retry budget, overwrites the cache entry under `key`.
    pub async fn fetch(&self, url: &Url, key: &str, freshness: Freshness) -> Result<String> {
        if self.cache.is_fresh(key, &self.policy, freshness)? {
            if let Some(content) = self.cache.read(key)? {
                debug!("cache hit for '{key}'");
                return Ok(content);
            }
        }

        debug!("fetching {url}");
        let mut content = self.get_text(url).await?;

        let mut attempts_left = self.policy.max_retries;
        while content.is_empty() && attempts_left > 0 {
            debug!(
                "empty body from {url}, retrying ({attempts_left} attempt(s) left)"
            );
            tokio::time::sleep(self.policy.retry_backoff).await;
            content = self.get_text(url).await?;
            attempts_left -= 1;
        }

        if content.is_empty() {
            warn!(
                "upstream returned an empty body for {url} after {} retries; caching it until expiry",
                self.policy.max_retries
            );
        }

        self.cache.write(key, &content)?;
        Ok(content)
    }

    /// One GET round-trip, decoding the body to canonical UTF-8.
    ///
    /// The upstream does not reliably declare its encoding, so the body is
    /// decoded lossily rather than trusted.
    async fn get_text(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()
            .map_err(Error::Network)?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::MaxAge;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_policy(max_retries: u32) -> FetchPolicy {
        FetchPolicy {
            max_age: MaxAge::Ttl(Duration::from_secs(3600)),
            max_retries,
            retry_backoff: Duration::ZERO,
        }
    }

    fn fetcher(dir: &TempDir, policy: FetchPolicy) -> Fetcher {
        let cache = CacheStore::new(dir.path()).unwrap();
        Fetcher::with_timeout(cache, policy, Duration::from_secs(5)).unwrap()
    }

    async fn request_count(server: &MockServer) -> usize {
        server.received_requests().await.unwrap().len()
    }

    #[tokio::test]
    async fn test_fetch_caches_and_serves_second_call_locally() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/character/Eitrigg/Kastang/simple"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>kastang</html>"))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = fetcher(&dir, test_policy(5));
        let url = Url::parse(&format!("{}/character/Eitrigg/Kastang/simple", server.uri())).unwrap();

        let first = fetcher.fetch(&url, "kastang.html", Freshness::ByAge).await.unwrap();
        let second = fetcher.fetch(&url, "kastang.html", Freshness::ByAge).await.unwrap();

        assert_eq!(first, "<html>kastang</html>");
        assert_eq!(second, first);
        assert_eq!(request_count(&server).await, 1, "second call must be a cache hit");
    }

    #[tokio::test]
    async fn test_empty_body_retried_until_content_appears() {
        let server = MockServer::start().await;
        // Two empty bodies, then real content.
        Mock::given(method("GET"))
            .and(path("/roster"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/roster"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>roster</html>"))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = fetcher(&dir, test_policy(5));
        let url = Url::parse(&format!("{}/roster", server.uri())).unwrap();

        let content = fetcher.fetch(&url, "roster.html", Freshness::ByAge).await.unwrap();
        assert_eq!(content, "<html>roster</html>");
        assert_eq!(request_count(&server).await, 3);
    }

    #[tokio::test]
    async fn test_empty_body_beyond_budget_returned_and_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roster"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = fetcher(&dir, test_policy(2));
        let url = Url::parse(&format!("{}/roster", server.uri())).unwrap();

        let content = fetcher.fetch(&url, "roster.html", Freshness::ByAge).await.unwrap();
        assert_eq!(content, "", "exhausted retries return the empty body, not an error");
        // 1 initial attempt + exactly max_retries retries.
        assert_eq!(request_count(&server).await, 3);

        // The empty body poisons the cache: the next call is a fresh cache
        // hit and never reaches the network.
        let again = fetcher.fetch(&url, "roster.html", Freshness::ByAge).await.unwrap();
        assert_eq!(again, "");
        assert_eq!(request_count(&server).await, 3);
    }

    #[tokio::test]
    async fn test_server_error_is_network_error_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = fetcher(&dir, test_policy(5));
        let url = Url::parse(&format!("{}/down", server.uri())).unwrap();

        match fetcher.fetch(&url, "down.html", Freshness::ByAge).await {
            Err(Error::Network(_)) => {},
            other => panic!("expected Network error, got {other:?}"),
        }
        // Status failures are not retried; only empty 200s are.
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_stale_entry_refetched_and_overwritten() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("new content"))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        // Disabled max age: every entry is stale, every call refetches.
        let policy = FetchPolicy {
            max_age: MaxAge::Disabled,
            max_retries: 0,
            retry_backoff: Duration::ZERO,
        };
        let fetcher = fetcher(&dir, policy);
        fetcher.cache().write("page.html", "old content").unwrap();

        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
        let content = fetcher.fetch(&url, "page.html", Freshness::ByAge).await.unwrap();
        assert_eq!(content, "new content");
        assert_eq!(
            fetcher.cache().read("page.html").unwrap().as_deref(),
            Some("new content")
        );
    }

    #[tokio::test]
    async fn test_pinned_entry_served_even_when_policy_disables_caching() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let policy = FetchPolicy {
            max_age: MaxAge::Disabled,
            max_retries: 0,
            retry_backoff: Duration::ZERO,
        };
        let fetcher = fetcher(&dir, policy);
        fetcher.cache().write("item_52212.html", "gem page").unwrap();

        let url = Url::parse(&format!("{}/item/52212", server.uri())).unwrap();
        let content = fetcher
            .fetch(&url, "item_52212.html", Freshness::Pinned)
            .await
            .unwrap();
        assert_eq!(content, "gem page");
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_body_decoded_to_utf8_lossily() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latin1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_bytes(vec![b'n', b'a', 0xEF, b'v', b'e']),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = fetcher(&dir, test_policy(0));
        let url = Url::parse(&format!("{}/latin1", server.uri())).unwrap();

        let content = fetcher.fetch(&url, "latin1.html", Freshness::ByAge).await.unwrap();
        assert_eq!(content, "na\u{FFFD}ve");
    }
}
