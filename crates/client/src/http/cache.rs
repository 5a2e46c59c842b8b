//! Response cache for the request helper.
//!
//! Responses are keyed on path and query parameters (never the API key) and
//! expire after a fixed window. The cache is an explicit object owned by the
//! client, so two clients never share entries unless they are handed the same
//! [`ResponseCache`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde_json::Value;

/// A response stored in the cache.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedResponse {
    /// HTTP status code of the original response.
    pub status: u16,
    /// Decoded JSON body.
    pub body: Value,
}

/// Storage backend for cached responses.
pub trait ResponseCache: Send + Sync {
    /// Returns the live entry for `key`, if any.
    fn get(&self, key: &str) -> Option<CachedResponse>;

    /// Stores a response under `key`.
    fn insert(&self, key: String, response: CachedResponse);

    /// Drops every entry.
    fn clear(&self);
}

#[derive(Debug)]
struct Entry {
    response: CachedResponse,
    stored_at: Instant,
}

#[derive(Debug)]
struct Store {
    entries: HashMap<String, Entry>,
    last_sweep: Instant,
}

impl Store {
    /// Drops expired entries and returns how many were removed.
    fn sweep(&mut self, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        self.last_sweep = Instant::now();
        before - self.entries.len()
    }
}

/// Thread-safe in-memory cache with a fixed time-to-live.
///
/// Expired entries are dropped when read, and swept from the whole map on
/// insert at most once per TTL, so distinct keys that are never read again
/// do not accumulate.
pub struct MemoryCache {
    store: Mutex<Store>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: Mutex::new(Store {
                entries: HashMap::new(),
                last_sweep: Instant::now(),
            }),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, expired ones included until they are evicted.
    pub fn len(&self) -> usize {
        self.lock_store().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every expired entry.
    pub fn evict_expired(&self) {
        let evicted = self.lock_store().sweep(self.ttl);
        if evicted > 0 {
            debug!("Response cache: evicted {} expired entries", evicted);
        }
    }

    /// Lock the store mutex, recovering from poison if necessary.
    fn lock_store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|poisoned| {
            warn!("Response cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<CachedResponse> {
        let mut store = self.lock_store();
        let entries = &mut store.entries;

        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.response.clone()),
            Some(_) => {
                debug!("Response cache: entry for '{}' expired", key);
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn insert(&self, key: String, response: CachedResponse) {
        let mut store = self.lock_store();

        if store.last_sweep.elapsed() >= self.ttl {
            let evicted = store.sweep(self.ttl);
            if evicted > 0 {
                debug!("Response cache: evicted {} expired entries", evicted);
            }
        }

        store.entries.insert(
            key,
            Entry {
                response,
                stored_at: Instant::now(),
            },
        );
    }

    fn clear(&self) {
        self.lock_store().entries.clear();
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}
