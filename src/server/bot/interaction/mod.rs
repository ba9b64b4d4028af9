//! Interaction dispatch pipeline.
//!
//! Discord interactions are converted into plain request types by [`adapter`], routed
//! through the [`registry::Registry`] by the [`dispatcher::Dispatcher`] and answered with
//! a [`response::Response`] that the adapter turns back into a Discord reply.
//!
//! Nothing between the adapter's two ends touches the gateway, so handlers and the
//! dispatch chain are tested without a Discord connection.

pub mod adapter;
pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod precondition;
pub mod registry;
pub mod request;
pub mod response;

#[cfg(test)]
mod test;
