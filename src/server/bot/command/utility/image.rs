use serde::Deserialize;
use serenity::{
    all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed},
    async_trait,
};
use std::time::Duration;

use crate::server::{
    bot::{
        command::EMBED_COLOR,
        interaction::{
            context::HandlerContext,
            handler::{CommandHandler, HandlerMeta},
            request::{CommandRequest, HandlerKind},
            response::Response,
        },
    },
    error::command::CommandError,
};

const IMAGE_URL: &str = "https://api.waifu.pics/sfw";

/// SFW categories offered as fixed choices.
pub const CATEGORIES: [&str; 12] = [
    "waifu", "neko", "shinobu", "megumin", "hug", "pat", "smile", "wave", "happy", "dance",
    "wink", "blush",
];

#[derive(Debug, Deserialize)]
struct ImageResponse {
    url: String,
}

pub fn check_category(category: &str) -> Result<&'static str, CommandError> {
    CATEGORIES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(category.trim()))
        .ok_or_else(|| CommandError::user(format!("'{}' is not an image category.", category)))
}

pub struct ImageCommand {
    meta: HandlerMeta,
}

impl ImageCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput).cooldown(Duration::from_secs(5)),
        }
    }
}

#[async_trait]
impl CommandHandler for ImageCommand {
    fn name(&self) -> &str {
        "image"
    }

    fn description(&self) -> &str {
        "A random image from a category"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        let category = CATEGORIES.iter().fold(
            CreateCommandOption::new(CommandOptionType::String, "category", "What to show")
                .required(true),
            |option, category| option.add_string_choice(*category, *category),
        );

        CreateCommand::new(self.name())
            .description(self.description())
            .add_option(category)
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let category = check_category(request.string("category").unwrap_or_default())?;

        let image: ImageResponse = ctx
            .http_client
            .get(format!("{}/{}", IMAGE_URL, category))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let embed = CreateEmbed::new()
            .title(category)
            .image(image.url)
            .color(EMBED_COLOR);

        Ok(Response::embed(embed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_listed_categories() {
        assert_eq!(check_category("Neko").unwrap(), "neko");
        assert_eq!(check_category("hug").unwrap(), "hug");
    }

    #[test]
    fn rejects_unlisted_categories() {
        assert!(check_category("nsfw").is_err());
        assert!(check_category("").is_err());
    }

    #[test]
    fn choices_fit_discord_limit() {
        assert!(CATEGORIES.len() <= 25);
    }
}
