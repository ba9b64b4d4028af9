//! Lookups against third-party APIs.
//!
//! All of them go through the shared HTTP client: one attempt, 10 second timeout, no
//! retries. Inputs are checked before any request is made.

pub mod github;
pub mod image;
pub mod ip;
pub mod weather;
