//! Client configuration.
//!
//! A [`ClientConfig`] is built once and owned by the client for its whole
//! lifetime. It can be assembled in code or loaded from the environment
//! (`.env` files are honored through `dotenvy`).

use std::time::Duration;

use crate::errors::{FmpError, ReconnectPolicy, Result, RetryPolicy};
use crate::stream::Feed;

/// Default REST base URL.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/";

/// Name of the query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apikey";

/// Default timeout for a single request.
const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default bound on opening a stream (TCP, TLS and WebSocket handshake).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default response cache expiry.
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Response cache settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CacheConfig {
    pub enabled: bool,
    /// How long a cached response stays valid.
    pub ttl: Duration,
    /// Query parameters left out of the cache key.
    pub ignored_parameters: Vec<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            ignored_parameters: vec![API_KEY_PARAM.to_string()],
        }
    }
}

impl CacheConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Configuration for [`FinancialModelingPrep`](crate::FinancialModelingPrep).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub cache: CacheConfig,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            cache: CacheConfig::default(),
            retry: RetryPolicy::default(),
        }
    }

    /// Loads configuration from `FMP_*` environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `FMP_API_KEY` | required |
    /// | `FMP_BASE_URL` | `https://financialmodelingprep.com/api/` |
    /// | `FMP_TIMEOUT_MS` | `5000` |
    /// | `FMP_CACHE_TTL_SECS` | `300` |
    /// | `FMP_CACHE_DISABLED` | `false` |
    /// | `FMP_MAX_RETRIES` | `0` |
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("FMP_API_KEY")
            .map_err(|_| FmpError::Config("FMP_API_KEY is not set".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(FmpError::Config("FMP_API_KEY is empty".to_string()));
        }

        let mut config = Self::new(api_key.trim());

        if let Ok(base_url) = std::env::var("FMP_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(timeout_ms) = parse_var::<u64>("FMP_TIMEOUT_MS")? {
            config.timeout = Duration::from_millis(timeout_ms);
        }
        if let Some(ttl) = parse_var::<u64>("FMP_CACHE_TTL_SECS")? {
            config.cache.ttl = Duration::from_secs(ttl);
        }
        if let Some(disabled) = parse_var::<bool>("FMP_CACHE_DISABLED")? {
            config.cache.enabled = !disabled;
        }
        if let Some(max_retries) = parse_var::<u32>("FMP_MAX_RETRIES")? {
            config.retry.max_retries = max_retries;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Base URL guaranteed to end with a single `/`.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

/// Configuration for a [`StreamClient`](crate::stream::StreamClient).
#[derive(Clone, Debug)]
pub struct StreamConfig {
    pub api_key: String,
    /// WebSocket URL of the feed.
    pub url: String,
    /// Upper bound on opening the socket, handshake included.
    pub connect_timeout: Duration,
    pub reconnect: ReconnectPolicy,
}

impl StreamConfig {
    pub fn new(feed: Feed, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            url: feed.url().to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            reconnect: ReconnectPolicy::default(),
        }
    }

    /// Points the stream at another server, e.g. a local test server.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_reconnect(mut self, reconnect: ReconnectPolicy) -> Self {
        self.reconnect = reconnect;
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| FmpError::Config(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(None),
    }
}
