//! The dispatch chain every command, component and modal interaction runs through.
//!
//! 1. Resolve the handler by command name or custom id key
//! 2. Compare the request kind with the kind the handler declares
//! 3. Run the handler's preconditions in order
//! 4. Claim the per-user cooldown key, unless the user is a bot owner
//! 5. Run the handler and render its error, if any
//! 6. Count the interaction in the background
//!
//! Every step ends in an [`Outcome`]; nothing in the chain is allowed to leave an
//! interaction unanswered.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::{collections::HashSet, sync::Arc, time::Duration};

use crate::server::{
    bot::interaction::{
        context::HandlerContext,
        handler::{CommandHandler, ComponentHandler, HandlerMeta, ModalHandler},
        registry::Registry,
        request::{
            AutocompleteRequest, CommandRequest, ComponentRequest, CustomId, ModalRequest, Request,
        },
        response::Response,
    },
    error::command::CommandError,
    service::stats::StatsService,
    store::KeyValueStore,
};

pub const UNKNOWN_HANDLER_MESSAGE: &str = "This interaction is no longer available.";
pub const TYPE_MISMATCH_MESSAGE: &str = "This interaction does not match the action it points to.";

/// Discord rejects autocomplete responses with more choices than this.
pub const MAX_CHOICES: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    UnknownHandler,
    TypeMismatch,
    PreconditionFailed,
    OnCooldown,
    /// The handler returned an error; `expected` errors were shown to the user verbatim.
    Failed { expected: bool },
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub response: Response,
    pub status: Status,
}

impl Outcome {
    fn new(response: Response, status: Status) -> Self {
        Self { response, status }
    }
}

/// A resolved handler paired with the request shape it accepts.
enum Target<'r> {
    Command(Arc<dyn CommandHandler>, &'r CommandRequest),
    Component(Arc<dyn ComponentHandler>, &'r ComponentRequest),
    Modal(Arc<dyn ModalHandler>, &'r ModalRequest),
}

impl Target<'_> {
    fn meta(&self) -> &HandlerMeta {
        match self {
            Target::Command(handler, _) => handler.meta(),
            Target::Component(handler, _) => handler.meta(),
            Target::Modal(handler, _) => handler.meta(),
        }
    }

    async fn run(&self, ctx: &HandlerContext<'_>, args: &[&str]) -> Result<Response, CommandError> {
        match self {
            Target::Command(handler, request) => handler.run(ctx, request).await,
            Target::Component(handler, request) => handler.run(ctx, request, args).await,
            Target::Modal(handler, request) => handler.run(ctx, request, args).await,
        }
    }
}

pub struct Dispatcher {
    registry: Arc<Registry>,
    db: DatabaseConnection,
    http_client: reqwest::Client,
    store: Arc<dyn KeyValueStore>,
    owners: HashSet<u64>,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<Registry>,
        db: DatabaseConnection,
        http_client: reqwest::Client,
        store: Arc<dyn KeyValueStore>,
        owners: impl IntoIterator<Item = u64>,
    ) -> Self {
        Self {
            registry,
            db,
            http_client,
            store,
            owners: owners.into_iter().collect(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn context<'a>(&'a self, discord: &'a Http) -> HandlerContext<'a> {
        HandlerContext {
            db: &self.db,
            http_client: &self.http_client,
            store: self.store.as_ref(),
            discord,
            owners: &self.owners,
        }
    }

    /// Runs the dispatch chain for one interaction.
    ///
    /// # Arguments
    /// - `discord` - HTTP client of the shard that received the interaction
    /// - `request` - The converted interaction
    ///
    /// # Returns
    /// - `Outcome` - The reply to send and how the chain ended
    pub async fn dispatch(&self, discord: &Http, request: Request) -> Outcome {
        let ctx = self.context(discord);
        let meta = request.meta();

        let (key, args) = match &request {
            Request::Command(req) => (req.name.as_str(), Vec::new()),
            Request::Component(req) => {
                let id = CustomId::parse(&req.custom_id);
                (id.key, id.args)
            }
            Request::Modal(req) => {
                let id = CustomId::parse(&req.custom_id);
                (id.key, id.args)
            }
        };
        let family = request.kind().family();

        let Some(target) = self.resolve(&request, key) else {
            tracing::warn!("No {} handler registered for '{}'", family, key);
            return Outcome::new(
                Response::ephemeral(UNKNOWN_HANDLER_MESSAGE),
                Status::UnknownHandler,
            );
        };

        let outcome = self.run_chain(&ctx, &request, &target, key, &args).await;

        tracing::debug!(
            "{} '{}' from user {} finished with {:?}",
            family,
            key,
            meta.user_id,
            outcome.status
        );
        self.record(
            family,
            key,
            matches!(outcome.status, Status::Failed { .. }),
        );

        outcome
    }

    fn resolve<'r>(&self, request: &'r Request, key: &str) -> Option<Target<'r>> {
        match request {
            Request::Command(req) => self
                .registry
                .command(key)
                .map(|handler| Target::Command(handler.clone(), req)),
            Request::Component(req) => self
                .registry
                .component(key)
                .map(|handler| Target::Component(handler.clone(), req)),
            Request::Modal(req) => self
                .registry
                .modal(key)
                .map(|handler| Target::Modal(handler.clone(), req)),
        }
    }

    async fn run_chain(
        &self,
        ctx: &HandlerContext<'_>,
        request: &Request,
        target: &Target<'_>,
        key: &str,
        args: &[&str],
    ) -> Outcome {
        let handler_meta = target.meta();
        let meta = request.meta();

        if handler_meta.kind != request.kind() {
            tracing::warn!(
                "Handler '{}' expects {:?} but received {:?}",
                key,
                handler_meta.kind,
                request.kind()
            );
            return Outcome::new(
                Response::ephemeral(TYPE_MISMATCH_MESSAGE),
                Status::TypeMismatch,
            );
        }

        for precondition in &handler_meta.preconditions {
            if let Err(message) = precondition.check(ctx, meta).await {
                return Outcome::new(Response::ephemeral(message), Status::PreconditionFailed);
            }
        }

        let mut claimed_cooldown = None;
        if let Some(cooldown) = handler_meta.cooldown {
            if !ctx.is_owner(meta.user_id) {
                let cooldown_key = format!(
                    "cooldown:{}:{}:{}",
                    request.kind().family(),
                    key,
                    meta.user_id
                );
                if let Some(remaining) = self.claim_cooldown(&cooldown_key, cooldown).await {
                    return Outcome::new(
                        Response::ephemeral(format!(
                            "Slow down! You can use this again in {} seconds.",
                            remaining
                        )),
                        Status::OnCooldown,
                    );
                }
                claimed_cooldown = Some(cooldown_key);
            }
        }

        match target.run(ctx, args).await {
            Ok(response) => Outcome::new(response, Status::Success),
            Err(err) => {
                let expected = err.is_expected();
                if expected {
                    tracing::debug!("Handler '{}' rejected input: {}", key, err);
                } else {
                    tracing::error!("Handler '{}' failed: {}", key, err);
                }
                if let Some(cooldown_key) = claimed_cooldown.filter(|_| err.is_rejected_input()) {
                    self.release_cooldown(&cooldown_key).await;
                }
                Outcome::new(
                    Response::ephemeral(err.user_message()),
                    Status::Failed { expected },
                )
            }
        }
    }

    /// Tries to start a cooldown.
    ///
    /// # Returns
    /// - `None` - Cooldown started, or the store failed and the check was skipped
    /// - `Some(seconds)` - Already on cooldown for this many more seconds
    async fn claim_cooldown(&self, key: &str, cooldown: Duration) -> Option<u64> {
        match self.store.set_if_absent(key, "1", cooldown).await {
            Ok(true) => None,
            Ok(false) => {
                let remaining = match self.store.ttl(key).await {
                    Ok(remaining) => remaining,
                    Err(e) => {
                        tracing::warn!("Failed to read cooldown TTL of '{}': {}", key, e);
                        None
                    }
                };
                Some(
                    remaining
                        .map(|ttl| ttl.as_secs_f64().ceil() as u64)
                        .unwrap_or(1)
                        .max(1),
                )
            }
            Err(e) => {
                tracing::warn!("Skipping cooldown '{}', store unavailable: {}", key, e);
                None
            }
        }
    }

    async fn release_cooldown(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            tracing::warn!("Failed to release cooldown '{}': {}", key, e);
        }
    }

    /// Increments telemetry counters without delaying the reply.
    fn record(&self, family: &'static str, key: &str, failed: bool) {
        let store = self.store.clone();
        let key = key.to_string();

        tokio::spawn(async move {
            if let Err(e) = StatsService::new(store.as_ref())
                .record(family, &key, failed)
                .await
            {
                tracing::debug!("Failed to record telemetry for '{}': {}", key, e);
            }
        });
    }

    /// Answers an autocomplete request.
    ///
    /// Preconditions, cooldowns and telemetry are skipped; any failure yields no choices.
    pub async fn autocomplete(&self, discord: &Http, request: &AutocompleteRequest) -> Response {
        let Some(handler) = self.registry.command(&request.command) else {
            return Response::Choices(Vec::new());
        };

        let ctx = self.context(discord);
        let mut choices = match handler.autocomplete(&ctx, request).await {
            Ok(choices) => choices,
            Err(e) => {
                tracing::debug!("Autocomplete for '{}' failed: {}", request.command, e);
                Vec::new()
            }
        };
        choices.truncate(MAX_CHOICES);

        Response::Choices(choices)
    }
}
