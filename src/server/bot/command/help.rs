use serenity::{
    all::{CreateCommand, CreateEmbed},
    async_trait,
};

use crate::server::{
    bot::{
        command::EMBED_COLOR,
        interaction::{
            context::HandlerContext,
            handler::{CommandHandler, HandlerMeta},
            registry::CommandSummary,
            request::{CommandRequest, HandlerKind},
            response::{Reply, Response},
        },
    },
    error::command::CommandError,
};

const NAME: &str = "help";
const DESCRIPTION: &str = "List every command";

/// Lists the chat commands registered before it, plus itself.
pub struct HelpCommand {
    meta: HandlerMeta,
    summaries: Vec<CommandSummary>,
}

impl HelpCommand {
    pub fn new(mut summaries: Vec<CommandSummary>) -> Self {
        summaries.push(CommandSummary {
            name: NAME.to_string(),
            description: DESCRIPTION.to_string(),
        });
        summaries.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput),
            summaries,
        }
    }
}

pub fn help_text(summaries: &[CommandSummary]) -> String {
    summaries
        .iter()
        .map(|summary| format!("`/{}` - {}", summary.name, summary.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl CommandHandler for HelpCommand {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(NAME).description(DESCRIPTION)
    }

    async fn run(
        &self,
        _ctx: &HandlerContext<'_>,
        _request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let embed = CreateEmbed::new()
            .title("Commands")
            .description(help_text(&self.summaries))
            .color(EMBED_COLOR);

        Ok(Response::Message(Reply::embed(embed).ephemeral()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, description: &str) -> CommandSummary {
        CommandSummary {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn adds_itself_in_order() {
        let help = HelpCommand::new(vec![summary("ping", "Pong"), summary("ban", "Ban")]);

        let names: Vec<&str> = help.summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ban", "help", "ping"]);
    }

    #[test]
    fn formats_one_line_per_command() {
        let text = help_text(&[summary("ping", "Pong"), summary("weather", "Forecast")]);
        assert_eq!(text, "`/ping` - Pong\n`/weather` - Forecast");
    }
}
