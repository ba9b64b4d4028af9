//! Framework independent interaction requests.

use chrono::{DateTime, Utc};
use serenity::all::Permissions;
use std::collections::HashMap;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01).
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Creation time encoded in a Discord snowflake.
pub fn snowflake_timestamp(id: u64) -> DateTime<Utc> {
    let millis = (id >> 22) + DISCORD_EPOCH_MS;
    DateTime::from_timestamp_millis(millis as i64).unwrap_or_default()
}

/// Who sent an interaction, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMeta {
    pub interaction_id: u64,
    pub user_id: u64,
    pub user_name: String,
    /// `None` in direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    /// Resolved permissions of the member in the channel, `None` outside guilds.
    pub member_permissions: Option<Permissions>,
    pub created_at: DateTime<Utc>,
}

impl InteractionMeta {
    pub fn new(interaction_id: u64, user_id: u64, user_name: impl Into<String>) -> Self {
        Self {
            interaction_id,
            user_id,
            user_name: user_name.into(),
            guild_id: None,
            channel_id: 0,
            member_permissions: None,
            created_at: snowflake_timestamp(interaction_id),
        }
    }

    pub fn in_guild(mut self, guild_id: u64, channel_id: u64, permissions: Permissions) -> Self {
        self.guild_id = Some(guild_id);
        self.channel_id = channel_id;
        self.member_permissions = Some(permissions);
        self
    }
}

/// The kind a handler declares and a request carries.
///
/// The dispatcher compares the two before running a handler, so a user context menu
/// registered under a chat command's name, or a select menu hitting a button's key,
/// never reaches code written for the other shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    ChatInput,
    UserContext,
    MessageContext,
    Button,
    StringSelect,
    UserSelect,
    RoleSelect,
    ChannelSelect,
    MentionableSelect,
    Modal,
}

impl HandlerKind {
    /// Namespace used in cooldown and telemetry keys.
    pub fn family(&self) -> &'static str {
        match self {
            HandlerKind::ChatInput | HandlerKind::UserContext | HandlerKind::MessageContext => {
                "command"
            }
            HandlerKind::Modal => "modal",
            _ => "component",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ChatInput,
    User,
    Message,
}

impl From<CommandKind> for HandlerKind {
    fn from(kind: CommandKind) -> Self {
        match kind {
            CommandKind::ChatInput => HandlerKind::ChatInput,
            CommandKind::User => HandlerKind::UserContext,
            CommandKind::Message => HandlerKind::MessageContext,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    User(u64),
    Channel(u64),
    Role(u64),
    Attachment(u64),
}

/// The message a message context menu was used on.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMessage {
    pub id: u64,
    pub author_id: u64,
    pub author_name: String,
    pub content: String,
}

/// A slash command or context menu invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    pub name: String,
    pub kind: CommandKind,
    /// Subcommand group and subcommand names, outermost first.
    pub subcommand: Vec<String>,
    pub options: HashMap<String, OptionValue>,
    /// User or message ID a context menu targets.
    pub target_id: Option<u64>,
    pub target_message: Option<TargetMessage>,
    pub meta: InteractionMeta,
}

impl CommandRequest {
    pub fn new(name: impl Into<String>, kind: CommandKind, meta: InteractionMeta) -> Self {
        Self {
            name: name.into(),
            kind,
            subcommand: Vec::new(),
            options: HashMap::new(),
            target_id: None,
            target_message: None,
            meta,
        }
    }

    pub fn with_subcommand(mut self, path: &[&str]) -> Self {
        self.subcommand = path.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options.insert(name.into(), value);
        self
    }

    /// Subcommand path joined with spaces, e.g. `social add`.
    pub fn subcommand_path(&self) -> String {
        self.subcommand.join(" ")
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.options.get(name) {
            Some(OptionValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn user(&self, name: &str) -> Option<u64> {
        match self.options.get(name) {
            Some(OptionValue::User(value)) => Some(*value),
            _ => None,
        }
    }
}

/// The focused option of a command while the user is typing.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteRequest {
    pub command: String,
    pub subcommand: Vec<String>,
    pub focused: String,
    pub partial: String,
    pub meta: InteractionMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Button,
    StringSelect,
    UserSelect,
    RoleSelect,
    ChannelSelect,
    MentionableSelect,
}

impl From<ComponentKind> for HandlerKind {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Button => HandlerKind::Button,
            ComponentKind::StringSelect => HandlerKind::StringSelect,
            ComponentKind::UserSelect => HandlerKind::UserSelect,
            ComponentKind::RoleSelect => HandlerKind::RoleSelect,
            ComponentKind::ChannelSelect => HandlerKind::ChannelSelect,
            ComponentKind::MentionableSelect => HandlerKind::MentionableSelect,
        }
    }
}

/// A click on a button or a choice in a select menu.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRequest {
    pub custom_id: String,
    pub kind: ComponentKind,
    pub values: Vec<String>,
    pub meta: InteractionMeta,
}

/// A submitted modal, text inputs keyed by their custom id.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalRequest {
    pub custom_id: String,
    pub fields: HashMap<String, String>,
    pub meta: InteractionMeta,
}

impl ModalRequest {
    /// Submitted value of an input, empty when the input was left out.
    pub fn field(&self, custom_id: &str) -> &str {
        self.fields.get(custom_id).map(String::as_str).unwrap_or("")
    }
}

/// Any interaction the dispatcher routes to a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Command(CommandRequest),
    Component(ComponentRequest),
    Modal(ModalRequest),
}

impl Request {
    pub fn kind(&self) -> HandlerKind {
        match self {
            Request::Command(req) => req.kind.into(),
            Request::Component(req) => req.kind.into(),
            Request::Modal(_) => HandlerKind::Modal,
        }
    }

    pub fn meta(&self) -> &InteractionMeta {
        match self {
            Request::Command(req) => &req.meta,
            Request::Component(req) => &req.meta,
            Request::Modal(req) => &req.meta,
        }
    }
}

/// A custom id split into its registry key and arguments.
///
/// Custom ids take the form `key[:arg[:arg...]]`, e.g. `feedback-status:<id>:ACCEPTED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomId<'a> {
    pub key: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> CustomId<'a> {
    pub fn parse(custom_id: &'a str) -> Self {
        let mut parts = custom_id.split(':');
        let key = parts.next().unwrap_or_default();
        Self {
            key,
            args: parts.collect(),
        }
    }
}

/// Builds a custom id from a key and its arguments.
pub fn custom_id(key: &str, args: &[&str]) -> String {
    std::iter::once(key)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(":")
}
