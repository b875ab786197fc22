// ABOUTME: In-memory cache implementation with LRU eviction and TTL support
// ABOUTME: Typed values behind an async RwLock, expired entries dropped on access or sweep
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache with LRU eviction
///
/// Clones share the same store.
#[derive(Debug, Clone)]
pub struct InMemoryCache<V> {
    store: Arc<RwLock<LruCache<String, CacheEntry<V>>>>,
    ttl: Duration,
}

impl<V: Clone> InMemoryCache<V> {
    /// Capacity used when zero entries are requested
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache holding at most `max_entries` values for `ttl` each
    #[must_use]
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Store `value` under `key` with the default TTL
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.ttl).await;
    }

    /// Store `value` under `key` with an explicit TTL
    pub async fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        // LruCache handles eviction automatically on push
        self.store
            .write()
            .await
            .push(key.into(), CacheEntry::new(value, ttl));
    }

    /// Fetch a live value, dropping it if expired
    pub async fn get(&self, key: &str) -> Option<V> {
        // LruCache::get is mutable (updates access order for LRU)
        let mut store = self.store.write().await;
        let expired = match store.get(key) {
            Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            store.pop(key);
        }
        None
    }

    /// Remove one entry
    pub async fn invalidate(&self, key: &str) {
        self.store.write().await.pop(key);
    }

    /// Remove every expired entry, returning how many were dropped
    pub async fn cleanup_expired(&self) -> usize {
        let mut store = self.store.write().await;

        // Collect expired keys first (can't modify while iterating)
        let expired_keys: Vec<String> = store
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            store.pop(key);
        }
        drop(store);

        if !expired_keys.is_empty() {
            debug!(count = expired_keys.len(), "Cleaned up expired cache entries");
        }
        expired_keys.len()
    }

    /// Number of stored entries, expired ones included
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Drop everything
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}
