//! Blob storage retrieval with a bounded in-memory cache.
//!
//! Images live in a remote bucket; the backend streams them through memory
//! and never touches disk. Repeated fetches of the same path are served from
//! a cache bounded both by a time-to-live and a total byte budget. Once the
//! budget is exceeded, oldest-first eviction runs until usage drops back
//! under 80% of the budget, so a single hot insert does not immediately
//! re-trigger eviction.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// A fetched blob: raw bytes plus the content type reported by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Blob retrieval contract. `NotFound` is an expected outcome, not a fault.
pub trait BlobStore {
    fn fetch(&self, path: &str) -> Result<Blob, ServiceError>;
}

/// Cache bounds. Reference values: 100 MB budget, 1 hour time-to-live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Total byte budget across all cached blobs.
    pub max_bytes: usize,
    /// How long an entry stays servable after insertion.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: 100 * 1024 * 1024,
            ttl: Duration::from_secs(3600),
        }
    }
}

/// Fraction of the byte budget eviction drains down to.
const EVICTION_LOW_WATER: f64 = 0.8;

#[derive(Debug, Clone)]
struct CacheEntry {
    blob: Blob,
    inserted_at: Instant,
    // Insertion order tiebreaker; Instant alone can collide on coarse clocks.
    seq: u64,
}

/// Size- and time-bounded in-memory blob cache with oldest-first eviction.
#[derive(Debug)]
pub struct BoundedCache {
    config: CacheConfig,
    entries: HashMap<String, CacheEntry>,
    next_seq: u64,
}

impl BoundedCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Look up a path, dropping the entry if its TTL has lapsed.
    pub fn get(&mut self, path: &str) -> Option<Blob> {
        match self.entries.get(path) {
            Some(entry) if entry.inserted_at.elapsed() < self.config.ttl => {
                Some(entry.blob.clone())
            }
            Some(_) => {
                self.entries.remove(path);
                None
            }
            None => None,
        }
    }

    /// Insert a blob, then enforce the TTL and byte budget.
    pub fn insert(&mut self, path: String, blob: Blob) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            path,
            CacheEntry {
                blob,
                inserted_at: Instant::now(),
                seq,
            },
        );
        self.enforce_bounds();
    }

    /// Current number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes held across all entries.
    pub fn total_bytes(&self) -> usize {
        self.entries.values().map(|e| e.blob.bytes.len()).sum()
    }

    fn enforce_bounds(&mut self) {
        // Expired entries go first.
        let ttl = self.config.ttl;
        self.entries.retain(|_, e| e.inserted_at.elapsed() < ttl);

        // Then, once over budget, oldest-first eviction down to the
        // low-water mark.
        if self.total_bytes() <= self.config.max_bytes {
            return;
        }
        let low_water = (self.config.max_bytes as f64 * EVICTION_LOW_WATER) as usize;
        while self.total_bytes() > low_water {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.seq)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}

/// A [`BlobStore`] wrapper that serves repeated fetches from a
/// [`BoundedCache`].
///
/// `NotFound` results are not cached; a blob uploaded after a miss becomes
/// visible on the next fetch.
#[derive(Debug)]
pub struct CachedStore<S> {
    inner: S,
    cache: Mutex<BoundedCache>,
}

impl<S: BlobStore> CachedStore<S> {
    pub fn new(inner: S, config: CacheConfig) -> Self {
        Self {
            inner,
            cache: Mutex::new(BoundedCache::new(config)),
        }
    }
}

impl<S: BlobStore> BlobStore for CachedStore<S> {
    fn fetch(&self, path: &str) -> Result<Blob, ServiceError> {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(blob) = cache.get(path) {
                return Ok(blob);
            }
        }

        let blob = self.inner.fetch(path)?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(path.to_string(), blob.clone());
        }
        Ok(blob)
    }
}
