//! Cron jobs running beside the bot and the HTTP server.

pub mod presence;
