//! Data transfer objects shared between the dashboard client and the server API.

pub mod api;
pub mod feedback;
pub mod id;
pub mod phrase;
pub mod profile;
pub mod stats;
pub mod user;
