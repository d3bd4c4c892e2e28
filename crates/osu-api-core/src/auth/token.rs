use std::fs;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::auth::Credentials;
use crate::error::{Error, Result};

pub const TOKEN_URL: &str = "https://osu.ppy.sh/oauth/token";

/// Tokens are renewed this many seconds before their actual expiry, so a
/// token handed to a caller cannot lapse mid-request.
pub const RENEWAL_MARGIN_SECS: i64 = 10;

/// A bearer token together with its absolute expiry.
///
/// This is also the record the file-backed store persists, so the field
/// names must round-trip through write-then-read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Stale once `expires_at - 10s` is at or before `now`.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - TimeDelta::seconds(RENEWAL_MARGIN_SECS) <= now
    }
}

/// Result of a successful token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// Persistence hooks for the cached token.
pub trait TokenStore: Send {
    fn load(&mut self) -> Result<Option<CachedToken>>;

    fn store(&mut self, token: &CachedToken) -> Result<()>;
}

/// Keeps the token for the lifetime of the cache instance only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cached: Option<CachedToken>,
}

impl TokenStore for MemoryStore {
    fn load(&mut self) -> Result<Option<CachedToken>> {
        Ok(self.cached.clone())
    }

    fn store(&mut self, token: &CachedToken) -> Result<()> {
        self.cached = Some(token.clone());
        Ok(())
    }
}

/// Persists the token as a small JSON record on disk.
///
/// The file is read at most once; afterwards the in-memory copy is
/// authoritative. Read and write failures are configuration errors, not
/// exchange errors, and are never swallowed: a corrupt cache must not
/// silently produce a stale or malformed token.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cached: Option<CachedToken>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }
}

impl TokenStore for FileStore {
    fn load(&mut self) -> Result<Option<CachedToken>> {
        if self.cached.is_none() && self.path.exists() {
            let content = fs::read_to_string(&self.path)
                .map_err(|e| Error::CacheNotReadable(e.to_string()))?;
            let token = serde_json::from_str(&content)
                .map_err(|e| Error::CacheNotReadable(e.to_string()))?;
            self.cached = Some(token);
        }
        Ok(self.cached.clone())
    }

    fn store(&mut self, token: &CachedToken) -> Result<()> {
        let content = serde_json::to_string(token)?;
        fs::write(&self.path, content).map_err(|e| Error::CacheNotWritable(e.to_string()))?;
        self.cached = Some(token.clone());
        Ok(())
    }
}

/// A fixed token that never goes stale. For test doubles only.
#[derive(Debug)]
pub struct ConstantStore {
    token: String,
}

impl ConstantStore {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenStore for ConstantStore {
    fn load(&mut self) -> Result<Option<CachedToken>> {
        Ok(Some(CachedToken {
            access_token: self.token.clone(),
            expires_at: Utc::now() + TimeDelta::days(3650),
        }))
    }

    fn store(&mut self, _token: &CachedToken) -> Result<()> {
        Ok(())
    }
}

/// The injected credential-exchange call.
pub trait TokenExchange: Send + Sync {
    fn exchange(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenGrant>> + Send;
}

/// Client-credentials exchange against the OAuth token endpoint.
pub struct OauthExchange {
    client: reqwest::Client,
    token_url: String,
}

impl OauthExchange {
    pub fn new() -> Self {
        Self::with_url(TOKEN_URL)
    }

    pub fn with_url(token_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            token_url: token_url.into(),
        }
    }
}

impl Default for OauthExchange {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenExchange for OauthExchange {
    fn exchange(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenGrant>> + Send {
        info!(
            "Requesting new API token for client ID {}",
            credentials.client_id()
        );

        // the form body is serialized into the builder right here, so the
        // future does not borrow the credentials
        let request = self.client.post(&self.token_url).form(&[
            ("client_id", credentials.client_id()),
            ("client_secret", credentials.client_secret()),
            ("grant_type", "client_credentials"),
            ("scope", "public"),
        ]);

        async move {
            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(Error::TokenExchange {
                    status: response.status().as_u16(),
                });
            }
            Ok(response.json::<TokenGrant>().await?)
        }
    }
}

/// Hands out a currently-valid bearer token, refreshing through the
/// exchange when the cached one is missing or inside the renewal margin.
///
/// The store sits behind a mutex that stays held across the refresh, so
/// concurrent callers trigger at most one exchange and the rest wait for
/// its result (unlike the historical implementation, which raced).
pub struct TokenCache<S, E = OauthExchange> {
    credentials: Credentials,
    store: Mutex<S>,
    exchange: E,
}

impl TokenCache<MemoryStore> {
    pub fn in_memory(credentials: Credentials) -> Self {
        Self::with_exchange(credentials, MemoryStore::default(), OauthExchange::new())
    }
}

impl TokenCache<FileStore> {
    pub fn in_file(credentials: Credentials, path: impl Into<PathBuf>) -> Self {
        Self::with_exchange(credentials, FileStore::new(path), OauthExchange::new())
    }
}

impl TokenCache<ConstantStore> {
    /// A cache that always returns `token`. The placeholder credentials
    /// never reach the network because the token never goes stale.
    pub fn constant(token: impl Into<String>) -> Self {
        Self::with_exchange(
            Credentials::dummy(),
            ConstantStore::new(token),
            OauthExchange::new(),
        )
    }
}

impl<S: TokenStore, E: TokenExchange> TokenCache<S, E> {
    pub fn with_exchange(credentials: Credentials, store: S, exchange: E) -> Self {
        Self {
            credentials,
            store: Mutex::new(store),
            exchange,
        }
    }

    pub async fn get_token(&self) -> Result<String> {
        let mut store = self.store.lock().await;

        let now = Utc::now();
        if let Some(cached) = store.load()? {
            if !cached.is_stale_at(now) {
                return Ok(cached.access_token);
            }
            debug!("Cached token is inside the renewal margin, refreshing");
        }

        let grant = self.exchange.exchange(&self.credentials).await?;
        let fresh = CachedToken {
            access_token: grant.access_token,
            expires_at: now + TimeDelta::seconds(grant.expires_in),
        };
        store.store(&fresh)?;

        Ok(fresh.access_token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use tempfile::TempDir;

    /// Exchange stub that counts calls and hands out sequential tokens.
    struct StubExchange {
        calls: AtomicU32,
        lifetime: i64,
    }

    impl StubExchange {
        fn new(lifetime: i64) -> Self {
            Self {
                calls: AtomicU32::new(0),
                lifetime,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TokenExchange for StubExchange {
        fn exchange(
            &self,
            _credentials: &Credentials,
        ) -> impl Future<Output = Result<TokenGrant>> + Send {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let lifetime = self.lifetime;
            async move {
                Ok(TokenGrant {
                    access_token: format!("T{}", n),
                    expires_in: lifetime,
                })
            }
        }
    }

    /// Exchange stub that always fails with an HTTP status.
    struct FailingExchange;

    impl TokenExchange for FailingExchange {
        fn exchange(
            &self,
            _credentials: &Credentials,
        ) -> impl Future<Output = Result<TokenGrant>> + Send {
            async { Err(Error::TokenExchange { status: 401 }) }
        }
    }

    fn cache_with<S: TokenStore>(store: S, lifetime: i64) -> TokenCache<S, StubExchange> {
        TokenCache::with_exchange(Credentials::dummy(), store, StubExchange::new(lifetime))
    }

    fn token_expiring_in(secs: i64) -> CachedToken {
        CachedToken {
            access_token: "SEEDED".to_string(),
            expires_at: Utc::now() + TimeDelta::seconds(secs),
        }
    }

    #[test]
    fn test_staleness_margin() {
        let now = Utc::now();
        let token = |secs| CachedToken {
            access_token: "T".to_string(),
            expires_at: now + TimeDelta::seconds(secs),
        };
        assert!(token(0).is_stale_at(now));
        assert!(token(10).is_stale_at(now));
        assert!(!token(11).is_stale_at(now));
        assert!(!token(60).is_stale_at(now));
    }

    #[tokio::test]
    async fn test_first_call_exchanges_once() {
        let cache = cache_with(MemoryStore::default(), 60);
        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(cache.exchange.calls(), 1);

        // still valid, no second exchange
        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(cache.exchange.calls(), 1);
    }

    #[tokio::test]
    async fn test_seeded_valid_token_is_reused() {
        let mut store = MemoryStore::default();
        store.store(&token_expiring_in(60)).unwrap();

        let cache = cache_with(store, 60);
        assert_eq!(cache.get_token().await.unwrap(), "SEEDED");
        assert_eq!(cache.exchange.calls(), 0);
    }

    #[tokio::test]
    async fn test_token_inside_margin_is_refreshed() {
        let mut store = MemoryStore::default();
        store.store(&token_expiring_in(9)).unwrap();

        let cache = cache_with(store, 60);
        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(cache.exchange.calls(), 1);
    }

    #[tokio::test]
    async fn test_exchange_failure_propagates() {
        let cache = TokenCache::with_exchange(
            Credentials::dummy(),
            MemoryStore::default(),
            FailingExchange,
        );
        assert!(matches!(
            cache.get_token().await,
            Err(Error::TokenExchange { status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_constant_cache_constructor() {
        // valid forever, so the real exchange behind it is never reached
        let cache = TokenCache::constant("fake");
        assert_eq!(cache.get_token().await.unwrap(), "fake");
    }

    #[tokio::test]
    async fn test_constant_store_never_exchanges() {
        let cache = cache_with(ConstantStore::new("fixed"), 60);
        assert_eq!(cache.get_token().await.unwrap(), "fixed");
        assert_eq!(cache.get_token().await.unwrap(), "fixed");
        assert_eq!(cache.exchange.calls(), 0);
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.json");

        let cache = cache_with(FileStore::new(&path), 60);
        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(cache.exchange.calls(), 1);

        // a fresh instance pointed at the same file reuses the token
        // without any exchange
        let reopened = cache_with(FileStore::new(&path), 60);
        assert_eq!(reopened.get_token().await.unwrap(), "T1");
        assert_eq!(reopened.exchange.calls(), 0);
    }

    #[tokio::test]
    async fn test_file_store_corrupt_cache_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.json");
        fs::write(&path, "not json").unwrap();

        let cache = cache_with(FileStore::new(&path), 60);
        assert!(matches!(
            cache.get_token().await,
            Err(Error::CacheNotReadable(_))
        ));
    }

    #[tokio::test]
    async fn test_file_store_unwritable_is_an_error() {
        let dir = TempDir::new().unwrap();
        // missing parent directory makes the write fail after a clean read
        let path = dir.path().join("missing").join("token.json");

        let cache = cache_with(FileStore::new(&path), 60);
        assert!(matches!(
            cache.get_token().await,
            Err(Error::CacheNotWritable(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_exchange() {
        use std::sync::Arc;

        let cache = Arc::new(cache_with(MemoryStore::default(), 60));
        let a = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get_token().await.unwrap() })
        };
        let b = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get_token().await.unwrap() })
        };

        assert_eq!(a.await.unwrap(), "T1");
        assert_eq!(b.await.unwrap(), "T1");
        assert_eq!(cache.exchange.calls(), 1);
    }
}
