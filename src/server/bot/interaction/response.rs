//! Replies produced by handlers and the dispatcher.
//!
//! Embeds and action rows reuse serenity's builders; everything else is plain data so
//! tests can inspect a reply without a Discord connection.

use serenity::all::{CreateActionRow, CreateEmbed};

#[derive(Debug, Clone)]
pub enum Response {
    /// New message in reply to the interaction.
    Message(Reply),
    /// Edit of the message a component is attached to.
    Update(Reply),
    /// Opens a form; only valid for commands and components.
    Modal(ModalForm),
    /// Autocomplete suggestions.
    Choices(Vec<Choice>),
    /// Acknowledges now, the reply follows later.
    Defer { ephemeral: bool },
}

impl Response {
    /// Plain text reply only the invoking user sees.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Response::Message(Reply::text(content).ephemeral())
    }

    /// Plain text reply visible to the channel.
    pub fn text(content: impl Into<String>) -> Self {
        Response::Message(Reply::text(content))
    }

    pub fn embed(embed: CreateEmbed) -> Self {
        Response::Message(Reply::embed(embed))
    }

    /// Text of the reply, if this response carries one.
    pub fn content(&self) -> Option<&str> {
        match self {
            Response::Message(reply) | Response::Update(reply) => reply.content.as_deref(),
            _ => None,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        match self {
            Response::Message(reply) | Response::Update(reply) => reply.ephemeral,
            Response::Defer { ephemeral } => *ephemeral,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
    pub components: Vec<CreateActionRow>,
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(embed: CreateEmbed) -> Self {
        Self {
            embeds: vec![embed],
            ..Default::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn components(mut self, components: Vec<CreateActionRow>) -> Self {
        self.components = components;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Short,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub custom_id: String,
    pub label: String,
    pub style: TextStyle,
    pub value: Option<String>,
    pub required: bool,
    pub min_length: Option<u16>,
    pub max_length: Option<u16>,
}

impl TextField {
    pub fn new(custom_id: &str, label: &str, style: TextStyle) -> Self {
        Self {
            custom_id: custom_id.to_string(),
            label: label.to_string(),
            style,
            value: None,
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub fn value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn length(mut self, min: u16, max: u16) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalForm {
    pub custom_id: String,
    pub title: String,
    pub inputs: Vec<TextField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub value: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
