use chrono::{DateTime, Utc};
use serenity::{all::CreateCommand, async_trait};
use std::time::Duration;

use crate::server::{
    bot::interaction::{
        context::HandlerContext,
        handler::{CommandHandler, HandlerMeta},
        request::{CommandRequest, HandlerKind},
        response::Response,
    },
    error::command::CommandError,
};

pub struct PingCommand {
    meta: HandlerMeta,
}

impl PingCommand {
    pub fn new() -> Self {
        Self {
            meta: HandlerMeta::new(HandlerKind::ChatInput).cooldown(Duration::from_secs(5)),
        }
    }
}

/// Milliseconds between the interaction's creation and `now`, never negative.
pub fn latency_ms(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_milliseconds().max(0)
}

#[async_trait]
impl CommandHandler for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "Check whether the bot is alive"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description(self.description())
    }

    async fn run(
        &self,
        _ctx: &HandlerContext<'_>,
        request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        let latency = latency_ms(request.meta.created_at, Utc::now());
        Ok(Response::text(format!("Pong! Latency: {} ms", latency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn measures_elapsed_time() {
        let created = Utc::now();
        assert_eq!(latency_ms(created, created + TimeDelta::milliseconds(42)), 42);
    }

    #[test]
    fn clock_skew_is_zero() {
        let created = Utc::now();
        assert_eq!(latency_ms(created, created - TimeDelta::seconds(1)), 0);
    }
}
