//! Handler traits and their declared metadata.

use serenity::{all::CreateCommand, async_trait};
use std::{sync::Arc, time::Duration};

use crate::server::{
    bot::interaction::{
        context::HandlerContext,
        precondition::Precondition,
        request::{AutocompleteRequest, CommandRequest, ComponentRequest, HandlerKind, ModalRequest},
        response::{Choice, Response},
    },
    error::command::CommandError,
};

/// What a handler declares about itself; the dispatcher enforces all of it.
#[derive(Clone)]
pub struct HandlerMeta {
    pub kind: HandlerKind,
    /// Checked in order, the first failure ends the interaction.
    pub preconditions: Vec<Arc<dyn Precondition>>,
    /// Per-user cooldown, skipped for bot owners.
    pub cooldown: Option<Duration>,
}

impl HandlerMeta {
    pub fn new(kind: HandlerKind) -> Self {
        Self {
            kind,
            preconditions: Vec::new(),
            cooldown: None,
        }
    }

    pub fn precondition(mut self, precondition: impl Precondition + 'static) -> Self {
        self.preconditions.push(Arc::new(precondition));
        self
    }

    pub fn cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Name Discord sends back, e.g. `profile` or `View Profile`.
    fn name(&self) -> &str;

    /// One line shown by `/help`.
    fn description(&self) -> &str;

    fn meta(&self) -> &HandlerMeta;

    /// Definition registered with Discord.
    fn definition(&self) -> CreateCommand;

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError>;

    /// Suggestions for the focused option; commands without autocompleted options keep
    /// the default.
    async fn autocomplete(
        &self,
        _ctx: &HandlerContext<'_>,
        _request: &AutocompleteRequest,
    ) -> Result<Vec<Choice>, CommandError> {
        Ok(Vec::new())
    }
}

#[async_trait]
pub trait ComponentHandler: Send + Sync {
    /// Custom id key, the part before the first `:`.
    fn key(&self) -> &str;

    fn meta(&self) -> &HandlerMeta;

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ComponentRequest,
        args: &[&str],
    ) -> Result<Response, CommandError>;
}

#[async_trait]
pub trait ModalHandler: Send + Sync {
    fn key(&self) -> &str;

    fn meta(&self) -> &HandlerMeta;

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ModalRequest,
        args: &[&str],
    ) -> Result<Response, CommandError>;
}
