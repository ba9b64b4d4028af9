//! Discord bot: gateway connection, command registration and interaction handling.
//!
//! The bot is built during server startup and runs in its own tokio task so the HTTP
//! server never waits on the gateway. Every interaction goes through the
//! [`interaction::dispatcher::Dispatcher`], which holds the handler registry built by
//! [`command::build_registry`].
//!
//! # Gateway Intents
//!
//! Interactions arrive regardless of intents; only `GUILDS` is requested so the shard
//! learns which guilds it serves.

pub mod command;
pub mod handler;
pub mod interaction;
pub mod start;
