use dashmap::{mapref::entry::Entry, DashMap};
use serenity::async_trait;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use tokio::time::Instant;

use crate::server::{error::store::StoreError, store::KeyValueStore};

struct StoredValue {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Expiring writes between two sweeps of the whole map.
const SWEEP_INTERVAL: u64 = 256;

/// In-process store with per-entry expiry.
///
/// Expired entries read as absent. They are dropped when read through `ttl`, on every
/// `counters` call and by a sweep every `SWEEP_INTERVAL` expiring writes, so per-user
/// cooldown keys do not pile up.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, StoredValue>,
    writes: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every expired entry.
    pub fn sweep(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| !entry.is_expired(now));
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, StoreError> {
        let now = Instant::now();
        let stored = StoredValue {
            value: value.to_string(),
            expires_at: Some(now + ttl),
        };

        let inserted = match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut entry) => {
                let expired = entry.get().is_expired(now);
                if expired {
                    entry.insert(stored);
                }
                expired
            }
            Entry::Vacant(entry) => {
                entry.insert(stored);
                true
            }
        };

        // sweep only once the entry guard is dropped, `retain` locks every shard
        if inserted {
            let written = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
            if written % SWEEP_INTERVAL == 0 {
                self.sweep();
            }
        }

        Ok(inserted)
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, StoreError> {
        let now = Instant::now();

        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            return Ok(None);
        }

        Ok(self.entries.get(key).and_then(|entry| {
            entry
                .expires_at
                .filter(|at| *at > now)
                .map(|at| at.duration_since(now))
        }))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let now = Instant::now();
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| StoredValue {
                value: "0".to_string(),
                expires_at: None,
            });

        if entry.is_expired(now) {
            entry.value = "0".to_string();
            entry.expires_at = None;
        }

        let current = entry
            .value
            .parse::<i64>()
            .map_err(|_| StoreError::NotAnInteger(key.to_string()))?;
        let next = current + 1;
        entry.value = next.to_string();

        Ok(next)
    }

    async fn counters(&self, prefix: &str) -> Result<Vec<(String, i64)>, StoreError> {
        self.sweep();

        let mut counters: Vec<(String, i64)> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .filter_map(|entry| {
                entry
                    .value
                    .parse::<i64>()
                    .ok()
                    .map(|count| (entry.key().clone(), count))
            })
            .collect();

        counters.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(counters)
    }
}
