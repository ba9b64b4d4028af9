//! Typed wrappers over the REST API, compiled for the browser only.

pub mod feedback;
pub mod helper;
pub mod me;
pub mod phrase;
pub mod profile;
pub mod stats;
pub mod user;
