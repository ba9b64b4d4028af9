use serenity::{
    all::{
        ButtonStyle, CommandOptionType, CreateActionRow, CreateButton, CreateCommand,
        CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    },
    async_trait,
};
use std::time::Duration;

use crate::server::{
    bot::{
        command::EMBED_COLOR,
        interaction::{
            context::HandlerContext,
            handler::{CommandHandler, ComponentHandler, HandlerMeta},
            precondition::{OwnerOnly, Precondition},
            request::{CommandRequest, ComponentRequest, HandlerKind},
            response::{Reply, Response},
        },
    },
    error::command::CommandError,
    model::phrase::{Phrase, PhraseParam, CONTENT_MAX_LENGTH, SOURCE_MAX_LENGTH},
    service::phrase::PhraseService,
};

pub const ANOTHER_BUTTON_KEY: &str = "phrase-another";

const NO_PHRASES_MESSAGE: &str = "There are no phrases yet.";

pub fn phrase_embed(phrase: &Phrase) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .description(format!("\u{201c}{}\u{201d}", phrase.content))
        .color(EMBED_COLOR);

    if let Some(source) = &phrase.source {
        embed = embed.footer(CreateEmbedFooter::new(format!("- {}", source)));
    }

    embed
}

fn another_button() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(ANOTHER_BUTTON_KEY)
        .label("Another one")
        .style(ButtonStyle::Secondary)])
}

/// A random phrase with the button asking for another, `None` when none are stored.
async fn random_reply(ctx: &HandlerContext<'_>) -> Result<Option<Reply>, CommandError> {
    let phrase = PhraseService::new(ctx.db).random().await?;

    Ok(phrase.map(|phrase| Reply::embed(phrase_embed(&phrase)).components(vec![another_button()])))
}

pub struct PhraseCommand {
    meta: HandlerMeta,
}

impl PhraseCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput),
        }
    }

    /// Owner-only subcommand of an otherwise public command.
    async fn add(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        OwnerOnly
            .check(ctx, &request.meta)
            .await
            .map_err(CommandError::User)?;

        let param = PhraseParam::new(
            request.string("content").unwrap_or_default(),
            request.string("source").map(str::to_string),
        );
        let phrase = PhraseService::new(ctx.db).create(param).await?;

        Ok(Response::Message(Reply::embed(phrase_embed(&phrase)).ephemeral()))
    }
}

#[async_trait]
impl CommandHandler for PhraseCommand {
    fn name(&self) -> &str {
        "phrase"
    }

    fn description(&self) -> &str {
        "Quotes and sayings"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "random",
                "Show a random phrase",
            ))
            .add_option(
                CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Store a phrase")
                    .add_sub_option(
                        CreateCommandOption::new(CommandOptionType::String, "content", "The phrase")
                            .max_length(CONTENT_MAX_LENGTH as u16)
                            .required(true),
                    )
                    .add_sub_option(
                        CreateCommandOption::new(
                            CommandOptionType::String,
                            "source",
                            "Who said it",
                        )
                        .max_length(SOURCE_MAX_LENGTH as u16),
                    ),
            )
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        match request.subcommand_path().as_str() {
            "random" => Ok(match random_reply(ctx).await? {
                Some(reply) => Response::Message(reply),
                None => Response::ephemeral(NO_PHRASES_MESSAGE),
            }),
            "add" => self.add(ctx, request).await,
            other => Err(CommandError::user(format!("Unknown subcommand '{}'", other))),
        }
    }
}

/// Swaps the phrase in place.
pub struct PhraseAnotherButton {
    meta: HandlerMeta,
}

impl PhraseAnotherButton {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::Button).cooldown(Duration::from_secs(3)),
        }
    }
}

#[async_trait]
impl ComponentHandler for PhraseAnotherButton {
    fn key(&self) -> &str {
        ANOTHER_BUTTON_KEY
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        _request: &ComponentRequest,
        _args: &[&str],
    ) -> Result<Response, CommandError> {
        match random_reply(ctx).await? {
            Some(reply) => Ok(Response::Update(reply)),
            None => Ok(Response::Update(Reply::text(NO_PHRASES_MESSAGE))),
        }
    }
}
