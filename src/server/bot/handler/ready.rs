//! Ready event handler for bot initialization.
//!
//! Fired after every successful gateway handshake, including reconnects. Command
//! definitions are sent to Discord each time; Discord only applies changes.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, GuildId, Ready};

use crate::server::bot::interaction::registry::Registry;

/// Registers every command of the registry with Discord.
///
/// # Arguments
/// - `registry` - Source of the command definitions
/// - `dev_guild_id` - Register to this guild only, changes apply instantly
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    registry: &Registry,
    dev_guild_id: Option<u64>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let definitions = registry.command_definitions();
    let count = definitions.len();

    let result = match dev_guild_id {
        Some(guild_id) => GuildId::new(guild_id)
            .set_commands(&ctx.http, definitions)
            .await
            .map(|_| format!("guild {}", guild_id)),
        None => Command::set_global_commands(&ctx.http, definitions)
            .await
            .map(|_| "all guilds".to_string()),
    };

    match result {
        Ok(scope) => tracing::info!("Registered {} commands for {}", count, scope),
        Err(e) => tracing::error!("Failed to register commands: {}", e),
    }
}
