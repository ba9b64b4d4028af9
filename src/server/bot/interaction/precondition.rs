//! Checks run before a handler, in the order the handler declares them.

use serenity::{all::Permissions, async_trait};

use crate::server::bot::interaction::{context::HandlerContext, request::InteractionMeta};

#[async_trait]
pub trait Precondition: Send + Sync {
    /// `Err` carries the reply shown to the user.
    async fn check(&self, ctx: &HandlerContext<'_>, meta: &InteractionMeta) -> Result<(), String>;
}

/// Only users listed in `BOT_OWNER_IDS`.
pub struct OwnerOnly;

#[async_trait]
impl Precondition for OwnerOnly {
    async fn check(&self, ctx: &HandlerContext<'_>, meta: &InteractionMeta) -> Result<(), String> {
        if ctx.is_owner(meta.user_id) {
            Ok(())
        } else {
            Err("Only the bot owner can use this.".to_string())
        }
    }
}

/// Refuses direct messages.
pub struct GuildOnly;

#[async_trait]
impl Precondition for GuildOnly {
    async fn check(&self, _ctx: &HandlerContext<'_>, meta: &InteractionMeta) -> Result<(), String> {
        if meta.guild_id.is_some() {
            Ok(())
        } else {
            Err("This can only be used in a server.".to_string())
        }
    }
}

/// Requires every listed permission of the invoking member. Implies [`GuildOnly`].
pub struct RequirePermissions(pub Permissions);

#[async_trait]
impl Precondition for RequirePermissions {
    async fn check(&self, _ctx: &HandlerContext<'_>, meta: &InteractionMeta) -> Result<(), String> {
        let Some(granted) = meta.member_permissions else {
            return Err("This can only be used in a server.".to_string());
        };

        if granted.contains(self.0) || granted.administrator() {
            return Ok(());
        }

        let missing = self.0.difference(granted);
        Err(format!(
            "You need the {} permission to use this.",
            missing.get_permission_names().join(", ")
        ))
    }
}
