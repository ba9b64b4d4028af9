//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, converting
//! at this boundary. All queries, inserts, updates and deletes go through them. IDs are
//! assumed to be well formed; malformed IDs are rejected by the service layer before a
//! repository is reached.

pub mod feedback;
pub mod phrase;
pub mod profile;
pub mod social;
pub mod user;

#[cfg(test)]
mod test;
