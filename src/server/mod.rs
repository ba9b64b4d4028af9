//! Server-side API backend, Discord bot and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations, and
//! Serenity for the Discord bot. The bot and the HTTP API share the service and data
//! layers, so a profile edited in Discord and one edited in the dashboard go through
//! the same validation.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Bot** (`bot/`) - Command handlers, the interaction dispatcher and the serenity adapter
//! - **Service Layer** (`service/`) - Business logic shared by controllers and commands
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, store)
//! - **Startup** (`startup`) - Initialization of database, sessions, store and services
//! - **Router** (`router`) - Axum routes, OpenAPI document, rate limiting and CORS
//! - **Store** (`store/`) - Key-value store for cooldowns and telemetry
//! - **Scheduler** (`scheduler/`) - Cron job rotating the bot presence
//!
//! # Interaction Flow
//!
//! 1. **Handler** receives the serenity interaction
//! 2. **Adapter** converts it into a request independent of serenity
//! 3. **Dispatcher** resolves the handler, checks kind, preconditions and cooldown
//! 4. **Command** calls services and builds a response
//! 5. **Adapter** converts the response back and the handler sends it
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
pub mod util;
