//! Request guards and typed session access for the REST API.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
