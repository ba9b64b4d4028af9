use redis::{aio::ConnectionManager, AsyncCommands};
use serenity::async_trait;
use std::time::Duration;

use crate::server::{error::store::StoreError, store::KeyValueStore};

/// Redis-backed store shared by every process pointed at the same server.
///
/// `ConnectionManager` reconnects on its own and is cheap to clone, so each call
/// works on its own clone.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    /// Opens a managed connection to `url`.
    ///
    /// # Returns
    /// - `Ok(RedisStore)` - Connected store
    /// - `Err(StoreError::Redis)` - Invalid URL or the server is unreachable
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        let connection = client.get_connection_manager().await?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, StoreError> {
        let mut connection = self.connection.clone();

        // SET replies OK when written and nil when NX refused the write
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async(&mut connection)
            .await?;

        Ok(reply.is_some())
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, StoreError> {
        let mut connection = self.connection.clone();

        // -2 when missing, -1 when the key has no expiry
        let seconds: i64 = connection.ttl(key).await?;

        Ok((seconds >= 0).then(|| Duration::from_secs(seconds as u64)))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut connection = self.connection.clone();
        let _: i64 = connection.del(key).await?;

        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let mut connection = self.connection.clone();
        let value: i64 = connection.incr(key, 1).await?;

        Ok(value)
    }

    async fn counters(&self, prefix: &str) -> Result<Vec<(String, i64)>, StoreError> {
        let mut connection = self.connection.clone();

        // SCAN walks the keyspace in batches instead of blocking the server like KEYS
        let mut keys = Vec::new();
        {
            let mut iter = connection
                .scan_match::<_, String>(format!("{}*", prefix))
                .await?;
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
        }
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        // SCAN may yield a key more than once
        keys.sort();
        keys.dedup();

        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut connection)
            .await?;

        Ok(keys
            .into_iter()
            .zip(values)
            .filter_map(|(key, value)| {
                value
                    .and_then(|v| v.parse::<i64>().ok())
                    .map(|count| (key, count))
            })
            .collect())
    }
}
