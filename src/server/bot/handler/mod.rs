use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::bot::interaction::dispatcher::Dispatcher;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<Dispatcher>,
    /// Commands are registered to this guild instead of globally when set.
    pub dev_guild_id: Option<u64>,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>, dev_guild_id: Option<u64>) -> Self {
        Self {
            dispatcher,
            dev_guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.dispatcher.registry(), self.dev_guild_id, ctx, ready).await;
    }

    /// Called for every slash command, context menu, component and modal submission
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.dispatcher, ctx, interaction).await;
    }
}
