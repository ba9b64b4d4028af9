//! `/ban`, `/kick`, `/timeout` and `/purge`.
//!
//! Each command is guild-only and requires the matching Discord permission of the
//! invoking member. None of them act on the caller or on the bot itself.

use chrono::{TimeDelta, Utc};
use serenity::{
    all::{
        ChannelId, CommandOptionType, CreateCommand, CreateCommandOption, EditMember,
        GetMessages, GuildId, MessageId, Permissions, UserId,
    },
    async_trait,
};

use crate::server::{
    bot::interaction::{
        context::HandlerContext,
        handler::{CommandHandler, HandlerMeta},
        precondition::{GuildOnly, RequirePermissions},
        request::{CommandRequest, HandlerKind},
        response::Response,
    },
    error::command::CommandError,
};

pub const TIMEOUT_MAX_MINUTES: i64 = 40_320;
pub const PURGE_MAX_MESSAGES: i64 = 100;
pub const BAN_MAX_DELETE_DAYS: i64 = 7;

/// Discord refuses to bulk delete messages older than this.
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

fn moderation_meta(permission: Permissions) -> HandlerMeta {
    HandlerMeta::new(HandlerKind::ChatInput)
        .precondition(GuildOnly)
        .precondition(RequirePermissions(permission))
}

/// Refuses moderation aimed at the caller or at the bot.
pub fn check_target(caller: u64, target: u64, bot: u64) -> Result<(), CommandError> {
    if target == caller {
        return Err(CommandError::user("You can't do that to yourself."));
    }
    if target == bot {
        return Err(CommandError::user("You can't do that to me."));
    }
    Ok(())
}

pub fn check_timeout_minutes(minutes: i64) -> Result<i64, CommandError> {
    if !(1..=TIMEOUT_MAX_MINUTES).contains(&minutes) {
        return Err(CommandError::user(format!(
            "Timeout must be between 1 and {} minutes.",
            TIMEOUT_MAX_MINUTES
        )));
    }
    Ok(minutes)
}

pub fn check_purge_amount(amount: i64) -> Result<u8, CommandError> {
    if !(1..=PURGE_MAX_MESSAGES).contains(&amount) {
        return Err(CommandError::user(format!(
            "You can purge between 1 and {} messages.",
            PURGE_MAX_MESSAGES
        )));
    }
    Ok(amount as u8)
}

pub fn check_delete_days(days: i64) -> Result<u8, CommandError> {
    if !(0..=BAN_MAX_DELETE_DAYS).contains(&days) {
        return Err(CommandError::user(format!(
            "Message history to delete must be between 0 and {} days.",
            BAN_MAX_DELETE_DAYS
        )));
    }
    Ok(days as u8)
}

fn reason(request: &CommandRequest) -> String {
    request
        .string("reason")
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .unwrap_or("No reason given")
        .to_string()
}

/// Guild and target of a moderation command after the target checks passed.
async fn resolve_target(
    ctx: &HandlerContext<'_>,
    request: &CommandRequest,
) -> Result<(GuildId, UserId), CommandError> {
    let guild_id = request
        .meta
        .guild_id
        .ok_or_else(|| CommandError::user("This can only be used in a server."))?;
    let target = request
        .user("user")
        .ok_or_else(|| CommandError::user("Pick a member."))?;

    let bot = ctx.discord.get_current_user().await?;
    check_target(request.meta.user_id, target, bot.id.get())?;

    Ok((GuildId::new(guild_id), UserId::new(target)))
}

fn user_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "user", description).required(true)
}

fn reason_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "reason", "Shown in the audit log")
        .max_length(512)
}

pub struct BanCommand {
    meta: HandlerMeta,
}

impl BanCommand {
    pub fn new() -> Self {
        Self {
            meta: moderation_meta(Permissions::BAN_MEMBERS),
        }
    }
}

#[async_trait]
impl CommandHandler for BanCommand {
    fn name(&self) -> &str {
        "ban"
    }

    fn description(&self) -> &str {
        "Ban a member from the server"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .default_member_permissions(Permissions::BAN_MEMBERS)
            .dm_permission(false)
            .add_option(user_option("Member to ban"))
            .add_option(reason_option())
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "delete_days",
                    "Days of their messages to delete",
                )
                .min_int_value(0)
                .max_int_value(BAN_MAX_DELETE_DAYS as u64),
            )
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let delete_days = check_delete_days(request.integer("delete_days").unwrap_or(0))?;
        let (guild_id, user_id) = resolve_target(ctx, request).await?;
        let reason = reason(request);

        guild_id
            .ban_with_reason(ctx.discord, user_id, delete_days, &reason)
            .await?;

        Ok(Response::ephemeral(format!(
            "Banned <@{}>. Reason: {}",
            user_id, reason
        )))
    }
}

pub struct KickCommand {
    meta: HandlerMeta,
}

impl KickCommand {
    pub fn new() -> Self {
        Self {
            meta: moderation_meta(Permissions::KICK_MEMBERS),
        }
    }
}

#[async_trait]
impl CommandHandler for KickCommand {
    fn name(&self) -> &str {
        "kick"
    }

    fn description(&self) -> &str {
        "Kick a member from the server"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .default_member_permissions(Permissions::KICK_MEMBERS)
            .dm_permission(false)
            .add_option(user_option("Member to kick"))
            .add_option(reason_option())
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let (guild_id, user_id) = resolve_target(ctx, request).await?;
        let reason = reason(request);

        guild_id
            .kick_with_reason(ctx.discord, user_id, &reason)
            .await?;

        Ok(Response::ephemeral(format!(
            "Kicked <@{}>. Reason: {}",
            user_id, reason
        )))
    }
}

pub struct TimeoutCommand {
    meta: HandlerMeta,
}

impl TimeoutCommand {
    pub fn new() -> Self {
        Self {
            meta: moderation_meta(Permissions::MODERATE_MEMBERS),
        }
    }
}

#[async_trait]
impl CommandHandler for TimeoutCommand {
    fn name(&self) -> &str {
        "timeout"
    }

    fn description(&self) -> &str {
        "Stop a member from talking for a while"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .default_member_permissions(Permissions::MODERATE_MEMBERS)
            .dm_permission(false)
            .add_option(user_option("Member to time out"))
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "minutes", "Duration")
                    .min_int_value(1)
                    .max_int_value(TIMEOUT_MAX_MINUTES as u64)
                    .required(true),
            )
            .add_option(reason_option())
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let minutes = check_timeout_minutes(request.integer("minutes").unwrap_or(0))?;
        let (guild_id, user_id) = resolve_target(ctx, request).await?;
        let reason = reason(request);

        let until = Utc::now() + TimeDelta::minutes(minutes);
        guild_id
            .edit_member(
                ctx.discord,
                user_id,
                EditMember::new()
                    .disable_communication_until(until.to_rfc3339())
                    .audit_log_reason(&reason),
            )
            .await?;

        Ok(Response::ephemeral(format!(
            "Timed out <@{}> for {} minutes. Reason: {}",
            user_id, minutes, reason
        )))
    }
}

pub struct PurgeCommand {
    meta: HandlerMeta,
}

impl PurgeCommand {
    pub fn new() -> Self {
        Self {
            meta: moderation_meta(Permissions::MANAGE_MESSAGES),
        }
    }
}

#[async_trait]
impl CommandHandler for PurgeCommand {
    fn name(&self) -> &str {
        "purge"
    }

    fn description(&self) -> &str {
        "Delete recent messages in this channel"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "amount", "How many")
                    .min_int_value(1)
                    .max_int_value(PURGE_MAX_MESSAGES as u64)
                    .required(true),
            )
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let amount = check_purge_amount(request.integer("amount").unwrap_or(0))?;
        let channel = ChannelId::new(request.meta.channel_id);

        let cutoff = Utc::now() - TimeDelta::days(BULK_DELETE_MAX_AGE_DAYS);
        let ids: Vec<MessageId> = channel
            .messages(ctx.discord, GetMessages::new().limit(amount))
            .await?
            .into_iter()
            .filter(|message| *message.timestamp > cutoff)
            .map(|message| message.id)
            .collect();

        match ids.as_slice() {
            [] => return Err(CommandError::user("There is nothing recent to delete.")),
            [single] => channel.delete_message(ctx.discord, *single).await?,
            _ => channel.delete_messages(ctx.discord, &ids).await?,
        }

        Ok(Response::ephemeral(format!("Deleted {} messages.", ids.len())))
    }
}
