use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::collections::HashSet;

use crate::server::store::KeyValueStore;

/// Resources a handler may use while answering one interaction.
///
/// Built by the dispatcher for each interaction from the resources it owns and the
/// Discord HTTP client of the shard the interaction arrived on.
pub struct HandlerContext<'a> {
    pub db: &'a DatabaseConnection,
    /// Client for third-party lookups, 10 second timeout and no retries.
    pub http_client: &'a reqwest::Client,
    pub store: &'a dyn KeyValueStore,
    pub discord: &'a Http,
    pub owners: &'a HashSet<u64>,
}

impl HandlerContext<'_> {
    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owners.contains(&user_id)
    }
}
