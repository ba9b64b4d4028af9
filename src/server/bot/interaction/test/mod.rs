//! Dispatcher tests with stub handlers.
//!
//! Handlers here answer with fixed responses so each test observes only the dispatch
//! chain. The Discord HTTP client is never used and is built without a token.

mod dispatch;
mod registry;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{CreateCommand, Permissions},
    async_trait,
    http::Http,
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use test_utils::builder::TestBuilder;

use crate::server::{
    bot::interaction::{
        context::HandlerContext,
        dispatcher::Dispatcher,
        handler::{CommandHandler, ComponentHandler, HandlerMeta, ModalHandler},
        precondition::Precondition,
        registry::Registry,
        request::{
            AutocompleteRequest, CommandKind, CommandRequest, ComponentKind, ComponentRequest,
            HandlerKind, InteractionMeta, ModalRequest, Request,
        },
        response::{Choice, Reply, Response},
    },
    error::{command::CommandError, store::StoreError, AppError},
    store::{KeyValueStore, MemoryStore},
};

pub const USER_ID: u64 = 200;
pub const OWNER_ID: u64 = 100;

/// What a stub handler does when run.
#[derive(Clone, Copy)]
pub enum Behavior {
    Reply(&'static str),
    UserError(&'static str),
    NotFound(&'static str),
    BadRequest(&'static str),
    Internal,
}

impl Behavior {
    fn run(&self) -> Result<Response, CommandError> {
        match self {
            Behavior::Reply(text) => Ok(Response::text(*text)),
            Behavior::UserError(message) => Err(CommandError::user(*message)),
            Behavior::NotFound(message) => Err(AppError::NotFound(message.to_string()).into()),
            Behavior::BadRequest(message) => {
                Err(AppError::BadRequest(message.to_string()).into())
            }
            Behavior::Internal => {
                Err(AppError::InternalError("connection reset".to_string()).into())
            }
        }
    }
}

pub struct StubCommand {
    pub name: &'static str,
    pub meta: HandlerMeta,
    pub behavior: Behavior,
    /// Number of choices returned by autocomplete, `None` to fail instead.
    pub choices: Option<usize>,
}

impl StubCommand {
    pub fn new(name: &'static str, behavior: Behavior) -> Self {
        Self {
            name,
            meta: HandlerMeta::new(HandlerKind::ChatInput),
            behavior,
            choices: Some(0),
        }
    }

    pub fn meta(mut self, meta: HandlerMeta) -> Self {
        self.meta = meta;
        self
    }
}

#[async_trait]
impl CommandHandler for StubCommand {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Stub command"
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name).description("Stub command")
    }

    async fn run(
        &self,
        _ctx: &HandlerContext<'_>,
        _request: &CommandRequest,
    ) -> Result<Response, CommandError> {
        self.behavior.run()
    }

    async fn autocomplete(
        &self,
        _ctx: &HandlerContext<'_>,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Choice>, CommandError> {
        match self.choices {
            Some(count) => Ok((0..count)
                .map(|i| Choice::new(format!("{}{}", request.partial, i), i.to_string()))
                .collect()),
            None => Err(CommandError::user("autocomplete failed")),
        }
    }
}

/// Replies with the custom id arguments joined by commas.
pub struct EchoComponent {
    pub key: &'static str,
    pub meta: HandlerMeta,
}

#[async_trait]
impl ComponentHandler for EchoComponent {
    fn key(&self) -> &str {
        self.key
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    async fn run(
        &self,
        _ctx: &HandlerContext<'_>,
        _request: &ComponentRequest,
        args: &[&str],
    ) -> Result<Response, CommandError> {
        Ok(Response::Update(Reply::text(args.join(","))))
    }
}

/// Replies with the value of the `name` input.
pub struct EchoModal {
    pub key: &'static str,
    pub meta: HandlerMeta,
}

#[async_trait]
impl ModalHandler for EchoModal {
    fn key(&self) -> &str {
        self.key
    }

    fn meta(&self) -> &HandlerMeta {
        &self.meta
    }

    async fn run(
        &self,
        _ctx: &HandlerContext<'_>,
        request: &ModalRequest,
        _args: &[&str],
    ) -> Result<Response, CommandError> {
        Ok(Response::ephemeral(request.field("name")))
    }
}

/// Counts its checks and passes or fails with a fixed message.
pub struct CountingPrecondition {
    pub calls: Arc<AtomicUsize>,
    pub failure: Option<&'static str>,
}

impl CountingPrecondition {
    pub fn new(failure: Option<&'static str>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                failure,
            },
            calls,
        )
    }
}

#[async_trait]
impl Precondition for CountingPrecondition {
    async fn check(&self, _ctx: &HandlerContext<'_>, _meta: &InteractionMeta) -> Result<(), String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(message) => Err(message.to_string()),
            None => Ok(()),
        }
    }
}

/// Store whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn set_if_absent(
        &self,
        key: &str,
        _value: &str,
        _ttl: Duration,
    ) -> Result<bool, StoreError> {
        Err(StoreError::NotAnInteger(key.to_string()))
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, StoreError> {
        Err(StoreError::NotAnInteger(key.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        Err(StoreError::NotAnInteger(key.to_string()))
    }

    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        Err(StoreError::NotAnInteger(key.to_string()))
    }

    async fn counters(&self, prefix: &str) -> Result<Vec<(String, i64)>, StoreError> {
        Err(StoreError::NotAnInteger(prefix.to_string()))
    }
}

pub async fn database() -> DatabaseConnection {
    let test = TestBuilder::new().build().await.unwrap();
    test.db.unwrap()
}

pub async fn dispatcher(registry: Registry, store: Arc<dyn KeyValueStore>) -> Dispatcher {
    Dispatcher::new(
        Arc::new(registry),
        database().await,
        reqwest::Client::new(),
        store,
        [OWNER_ID],
    )
}

pub fn discord() -> Http {
    Http::new("")
}

pub fn meta(user_id: u64) -> InteractionMeta {
    InteractionMeta::new(1 << 22, user_id, "tester")
}

pub fn guild_meta(user_id: u64, permissions: Permissions) -> InteractionMeta {
    meta(user_id).in_guild(1, 2, permissions)
}

pub fn command(name: &str, user_id: u64) -> Request {
    Request::Command(CommandRequest::new(name, CommandKind::ChatInput, meta(user_id)))
}

pub fn button(custom_id: &str, user_id: u64) -> Request {
    Request::Component(ComponentRequest {
        custom_id: custom_id.to_string(),
        kind: ComponentKind::Button,
        values: Vec::new(),
        meta: meta(user_id),
    })
}

pub fn modal(custom_id: &str, name: &str) -> Request {
    Request::Modal(ModalRequest {
        custom_id: custom_id.to_string(),
        fields: HashMap::from([("name".to_string(), name.to_string())]),
        meta: meta(USER_ID),
    })
}

/// Lets spawned telemetry tasks finish.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}

pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}
