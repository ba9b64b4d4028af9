use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    pub discord_bot_token: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Discord IDs allowed through owner-only preconditions.
    pub bot_owner_ids: Vec<u64>,
    /// Registers commands to this guild only, which applies instantly during development.
    pub dev_guild_id: Option<u64>,
    /// Redis connection string; the in-process store is used when unset.
    pub redis_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            bot_owner_ids: parse_id_list(
                "BOT_OWNER_IDS",
                &std::env::var("BOT_OWNER_IDS").unwrap_or_default(),
            )?,
            dev_guild_id: optional("DEV_GUILD_ID")
                .map(|value| parse_id("DEV_GUILD_ID", &value))
                .transpose()?,
            redis_url: optional("REDIS_URL"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}

/// Parses a comma separated list of Discord IDs, ignoring empty entries.
fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_id(name, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_list_with_whitespace() {
        let ids = parse_id_list("BOT_OWNER_IDS", " 123, 456 ,,789").unwrap();
        assert_eq!(ids, vec![123, 456, 789]);
    }

    #[test]
    fn empty_owner_list_is_allowed() {
        assert!(parse_id_list("BOT_OWNER_IDS", "").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_owner() {
        let result = parse_id_list("BOT_OWNER_IDS", "123,abc");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref value, .. }) if value == "abc"
        ));
    }
}
