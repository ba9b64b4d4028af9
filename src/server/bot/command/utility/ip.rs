use serde::Deserialize;
use serenity::{
    all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed},
    async_trait,
};
use std::{net::IpAddr, time::Duration};

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

const LOOKUP_URL: &str = "http://ip-api.com/json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpLookup {
    pub status: String,
    pub message: Option<String>,
    pub query: String,
    pub country: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
    pub timezone: Option<String>,
}

pub fn parse_address(input: &str) -> Result<IpAddr, CommandError> {
    input
        .trim()
        .parse::<IpAddr>()
        .map_err(|_| CommandError::user(format!("'{}' is not a valid IP address.", input.trim())))
}

pub fn ip_embed(lookup: &IpLookup) -> Result<CreateEmbed, CommandError> {
    if lookup.status != "success" {
        let reason = lookup.message.as_deref().unwrap_or("lookup failed");
        return Err(CommandError::user(format!(
            "No information for {}: {}.",
            lookup.query, reason
        )));
    }

    let unknown = "Unknown";
    let location = [lookup.city.as_deref(), lookup.region_name.as_deref(), lookup.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(CreateEmbed::new()
        .title(&lookup.query)
        .field(
            "Location",
            if location.is_empty() { unknown.to_string() } else { location },
            false,
        )
        .field("ISP", lookup.isp.as_deref().unwrap_or(unknown), true)
        .field("Timezone", lookup.timezone.as_deref().unwrap_or(unknown), true)
        .color(EMBED_COLOR))
}

pub struct IpCommand {
    meta: HandlerMeta,
}

impl IpCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput).cooldown(Duration::from_secs(10)),
        }
    }
}

#[async_trait]
impl CommandHandler for IpCommand {
    fn name(&self) -> &str {
        "ip"
    }

    fn description(&self) -> &str {
        "Where an IP address is located"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(self.description())
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "address", "IPv4 or IPv6")
                    .max_length(45)
                    .required(true),
            )
    }

    async fn run(
        &self,
        ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let address = parse_address(request.string("address").unwrap_or_default())?;

        let lookup: IpLookup = ctx
            .http_client
            .get(format!("{}/{}", LOOKUP_URL, address))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Response::embed(ip_embed(&lookup)?))
    }
}
