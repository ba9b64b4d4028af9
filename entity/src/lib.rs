//! SeaORM entity models for the Wren database schema.

pub mod prelude;

pub mod feedback;
pub mod phrase;
pub mod profile;
pub mod social;
pub mod user;
