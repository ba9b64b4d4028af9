//! Key-value store backing interaction cooldowns and telemetry counters.
//!
//! Cooldowns rely on an atomic set-if-absent with a TTL, counters on an atomic
//! increment. Redis provides both across processes; `MemoryStore` provides them
//! in-process when no Redis URL is configured and in tests.

pub mod memory;
pub mod redis_store;

use serenity::async_trait;
use std::time::Duration;

use crate::server::error::store::StoreError;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key` with an expiry unless the key already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The key was absent and has been set
    /// - `Ok(false)` - The key already exists and was left untouched
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration)
        -> Result<bool, StoreError>;

    /// Remaining lifetime of `key`, `None` when the key is missing or has no expiry.
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, StoreError>;

    /// Deletes `key`. Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Atomically increments the counter at `key`, creating it at zero first.
    async fn incr(&self, key: &str) -> Result<i64, StoreError>;

    /// All counters whose key starts with `prefix`, sorted by key.
    async fn counters(&self, prefix: &str) -> Result<Vec<(String, i64)>, StoreError>;
}
