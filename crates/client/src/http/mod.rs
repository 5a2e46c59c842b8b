//! Shared HTTP request helper.
//!
//! Every endpoint call ends up here: the resolved [`ApiRequest`] is turned into a
//! URL carrying the API key, sent as a GET with the configured timeout, and the
//! JSON body is returned. Successful responses are cached by [`ResponseCache`].

mod cache;
mod request;

pub use cache::{CachedResponse, MemoryCache, ResponseCache};
pub use request::ApiRequest;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::{classify_response, FmpError, Result, RetryClass, RetryPolicy};

const USER_AGENT: &str = concat!("fmp-client/", env!("CARGO_PKG_VERSION"));

/// Performs authenticated GET requests against the REST API.
///
/// Cheap to clone; clones share the connection pool and the response cache.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
    cache: Option<Arc<dyn ResponseCache>>,
    ignored_parameters: Vec<String>,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a helper from the configuration, with an in-memory cache when
    /// caching is enabled.
    pub fn new(config: &ClientConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| Arc::new(MemoryCache::new(config.cache.ttl)) as Arc<dyn ResponseCache>);
        Self::build(config, cache)
    }

    /// Creates a helper that stores responses in the given cache.
    pub fn with_cache(config: &ClientConfig, cache: Arc<dyn ResponseCache>) -> Self {
        Self::build(config, Some(cache))
    }

    fn build(config: &ClientConfig, cache: Option<Arc<dyn ResponseCache>>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.normalized_base_url(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
            cache,
            ignored_parameters: config.cache.ignored_parameters.clone(),
            retry: config.retry.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn cache(&self) -> Option<&Arc<dyn ResponseCache>> {
        self.cache.as_ref()
    }

    /// Drops every cached response.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Performs the request and returns the decoded body as the server sent it.
    ///
    /// Error-shaped bodies (`{"Error Message": ...}`) are returned like any other
    /// payload. Only transport failures and undecodable bodies are errors.
    pub async fn get(&self, request: &ApiRequest) -> Result<Value> {
        self.send(request, false).await
    }

    /// Performs the request and classifies error-shaped bodies and non-2xx
    /// statuses into [`FmpError::Api`].
    pub async fn fetch(&self, request: &ApiRequest) -> Result<Value> {
        self.send(request, true).await
    }

    async fn send(&self, request: &ApiRequest, classify: bool) -> Result<Value> {
        let cache_key = request.cache_key(&self.ignored_parameters);

        if let Some(cached) = self.cache.as_ref().and_then(|cache| cache.get(&cache_key)) {
            debug!("FMP cache hit: {}", cache_key);
            return Ok(cached.body);
        }

        let mut attempt = 0;
        let response = loop {
            match self.attempt(request, classify).await {
                Ok(response) => break response,
                Err(e)
                    if attempt < self.retry.max_retries
                        && e.retry_class() == RetryClass::WithBackoff =>
                {
                    attempt += 1;
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        "FMP request {} failed ({}), retrying in {:?} ({}/{})",
                        request.path, e, delay, attempt, self.retry.max_retries
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        };

        if let Some(cache) = &self.cache {
            if is_cacheable(&response) {
                cache.insert(cache_key, response.clone());
            }
        }

        Ok(response.body)
    }

    async fn attempt(&self, request: &ApiRequest, classify: bool) -> Result<CachedResponse> {
        let response = self.execute(request).await?;

        if classify {
            let status = StatusCode::from_u16(response.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if let Some(failure) = classify_response(status, &response.body) {
                return Err(failure.into());
            }
        }

        Ok(response)
    }

    async fn execute(&self, request: &ApiRequest) -> Result<CachedResponse> {
        let url = request.url(&self.base_url, &self.api_key)?;

        debug!(
            "FMP request: {} with {} params",
            request.path,
            request.query.len()
        );

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(e, request))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, request))?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            // Gateways answer failures with HTML; keep the text for the caller.
            Err(_) if !status.is_success() => Value::String(text),
            Err(source) => {
                return Err(FmpError::Decode {
                    endpoint: request.path.clone(),
                    source,
                })
            }
        };

        debug!("FMP response: {} -> {}", request.path, status);

        Ok(CachedResponse {
            status: status.as_u16(),
            body,
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("cache", &self.cache.is_some())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

fn map_transport_error(error: reqwest::Error, request: &ApiRequest) -> FmpError {
    if error.is_timeout() {
        FmpError::Timeout {
            endpoint: request.path.clone(),
        }
    } else {
        // The URL carries the API key; never let it reach error messages.
        FmpError::Network(error.without_url())
    }
}

/// Only successful, non-error payloads are worth replaying.
fn is_cacheable(response: &CachedResponse) -> bool {
    match StatusCode::from_u16(response.status) {
        Ok(status) => classify_response(status, &response.body).is_none(),
        Err(_) => false,
    }
}
