//! Interaction telemetry counters.
//!
//! Counters live in the key-value store under `stats:`:
//!
//! - `stats:interactions:total` counts every dispatched interaction
//! - `stats:{kind}:{key}` counts invocations per handler, e.g. `stats:command:ping`
//! - `stats:errors:{kind}:{key}` counts failed invocations per handler

use crate::server::{error::store::StoreError, model::stats::Stats, store::KeyValueStore};

const PREFIX: &str = "stats:";
const TOTAL_KEY: &str = "stats:interactions:total";
const ERRORS_PREFIX: &str = "errors:";

pub struct StatsService<'a> {
    pub store: &'a dyn KeyValueStore,
}

impl<'a> StatsService<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Counts one dispatched interaction.
    ///
    /// # Arguments
    /// - `kind` - Handler kind, `command`, `component` or `modal`
    /// - `key` - Command name or custom id key
    /// - `failed` - Whether the handler returned an error
    pub async fn record(&self, kind: &str, key: &str, failed: bool) -> Result<(), StoreError> {
        self.store.incr(TOTAL_KEY).await?;
        self.store
            .incr(&format!("{}{}:{}", PREFIX, kind, key))
            .await?;

        if failed {
            self.store
                .incr(&format!("{}{}{}:{}", PREFIX, ERRORS_PREFIX, kind, key))
                .await?;
        }

        Ok(())
    }

    /// Reads back every counter, split into the total, per handler and error counts.
    pub async fn get_stats(&self) -> Result<Stats, StoreError> {
        let mut stats = Stats::default();

        for (key, count) in self.store.counters(PREFIX).await? {
            if key == TOTAL_KEY {
                stats.total = count;
                continue;
            }

            let name = key.trim_start_matches(PREFIX);
            match name.strip_prefix(ERRORS_PREFIX) {
                Some(handler) => stats.errors.push((handler.to_string(), count)),
                None => stats.interactions.push((name.to_string(), count)),
            }
        }

        Ok(stats)
    }
}
