//! Injected location cache
//!
//! The resolver takes the cache as a trait object so tests can
//! substitute a deterministic fake and assert tier fallback without
//! network access. The default backend is an in-process map with lazy
//! TTL expiry; entries are immutable and idempotent to recompute, so
//! concurrent misses racing to populate a key are harmless.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::location::ResolvedLocation;

/// Cache tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoCacheConfig {
    /// Entry time-to-live
    #[serde(default = "default_ttl")]
    pub ttl: Duration,

    /// Initial map capacity
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_ttl() -> Duration {
    // Jurisdiction boundaries do not move; two days keeps repeat
    // analyses of the same site off the network.
    Duration::from_secs(48 * 60 * 60)
}

fn default_capacity() -> usize {
    256
}

impl Default for GeoCacheConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            capacity: default_capacity(),
        }
    }
}

impl GeoCacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Read-mostly location cache
#[async_trait]
pub trait GeoCache: Send + Sync {
    /// Fetch a live entry; expired entries count as misses
    async fn get(&self, key: &str) -> Option<ResolvedLocation>;

    /// Store an entry under the configured TTL
    async fn set(&self, key: &str, location: ResolvedLocation);

    /// Drop every expired entry
    async fn purge_expired(&self);
}

struct Entry {
    location: ResolvedLocation,
    stored_at: Instant,
}

/// Default in-process cache backend
pub struct MemoryGeoCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryGeoCache {
    pub fn new(config: GeoCacheConfig) -> Self {
        Self {
            ttl: config.ttl,
            entries: RwLock::new(HashMap::with_capacity(config.capacity)),
        }
    }

    fn is_live(&self, entry: &Entry) -> bool {
        entry.stored_at.elapsed() < self.ttl
    }
}

impl Default for MemoryGeoCache {
    fn default() -> Self {
        Self::new(GeoCacheConfig::default())
    }
}

#[async_trait]
impl GeoCache for MemoryGeoCache {
    async fn get(&self, key: &str) -> Option<ResolvedLocation> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if self.is_live(entry) => {
                    return Some(entry.location.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Stale hit: purge lazily on the write path.
        self.entries.write().await.remove(key);
        None
    }

    async fn set(&self, key: &str, location: ResolvedLocation) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                location,
                stored_at: Instant::now(),
            },
        );
    }

    async fn purge_expired(&self) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
    }
}
