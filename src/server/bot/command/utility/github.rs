use reqwest::StatusCode;
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

const USERS_URL: &str = "https://api.github.com/users";
const USERNAME_MAX_LENGTH: usize = 39;

#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub html_url: String,
    pub avatar_url: String,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

/// GitHub usernames: alphanumerics and single inner hyphens, at most 39 characters.
pub fn check_username(username: &str) -> Result<&str, CommandError> {
    let username = username.trim();
    let valid = !username.is_empty()
        && username.len() <= USERNAME_MAX_LENGTH
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !username.starts_with('-')
        && !username.ends_with('-')
        && !username.contains("--");

    if !valid {
        return Err(CommandError::user(format!(
            "'{}' is not a valid GitHub username.",
            username
        )));
    }
    Ok(username)
}

pub fn github_embed(user: &GithubUser) -> CreateEmbed {
    let title = match &user.name {
        Some(name) => format!("{} ({})", name, user.login),
        None => user.login.clone(),
    };

    CreateEmbed::new()
        .title(title)
        .url(&user.html_url)
        .thumbnail(&user.avatar_url)
        .description(user.bio.as_deref().unwrap_or(""))
        .field("Repositories", user.public_repos.to_string(), true)
        .field("Followers", user.followers.to_string(), true)
        .field("Following", user.following.to_string(), true)
        .color(EMBED_COLOR)
}

pub struct GithubCommand {
    meta: HandlerMeta,
}

impl GithubCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput).cooldown(Duration::from_secs(10)),
        }
    }
}

#[async_trait]
impl CommandHandler for GithubCommand {
    fn name(&self) -> &str {
        "github"
    }

    fn description(&self) -> &str {
        "Look up a GitHub user"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "username", "GitHub username")
                    .max_length(USERNAME_MAX_LENGTH as u16)
                    .required(true),
            )
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let username = check_username(request.string("username").unwrap_or_default())?;

        let response = ctx
            .http_client
            .get(format!("{}/{}", USERS_URL, username))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CommandError::user(format!(
                "GitHub user '{}' not found.",
                username
            )));
        }

        let user: GithubUser = response.error_for_status()?.json().await?;

        Ok(Response::embed(github_embed(&user)))
    }
}
