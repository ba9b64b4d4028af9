use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::server::{
    bot::{handler::Handler, interaction::dispatcher::Dispatcher},
    config::Config,
    error::AppError,
};

/// Builds the Discord client without connecting it.
///
/// The caller takes the client's shard manager for the presence scheduler before
/// handing the client to [`start_bot`].
///
/// # Arguments
/// - `config` - Application configuration with the bot token and development guild
/// - `dispatcher` - Dispatcher every interaction is routed through
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError::DiscordErr)` - Token rejected or client construction failed
pub async fn init_bot(config: &Config, dispatcher: Arc<Dispatcher>) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;
    let handler = Handler::new(dispatcher, config.dev_guild_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until the client shuts down.
///
/// Meant to run inside its own `tokio::spawn` task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
