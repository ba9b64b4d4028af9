//! Interaction event handler.
//!
//! Converts each interaction with the adapter, runs it through the dispatcher and
//! sends the reply. A reply that fails to send is logged; Discord shows the user a
//! failed interaction on its own.

use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::server::bot::interaction::{adapter, dispatcher::Dispatcher, request::Request};

pub async fn handle_interaction(dispatcher: &Dispatcher, ctx: Context, interaction: Interaction) {
    let result = match interaction {
        Interaction::Command(command) => {
            let request = Request::Command(adapter::command_request(&command));
            let outcome = dispatcher.dispatch(&ctx.http, request).await;
            command
                .create_response(&ctx.http, adapter::to_discord(outcome.response, false))
                .await
        }
        Interaction::Autocomplete(command) => {
            let Some(request) = adapter::autocomplete_request(&command) else {
                return;
            };
            let response = dispatcher.autocomplete(&ctx.http, &request).await;
            command
                .create_response(&ctx.http, adapter::to_discord(response, false))
                .await
        }
        Interaction::Component(component) => {
            let Some(request) = adapter::component_request(&component) else {
                tracing::warn!(
                    "Ignoring unsupported component '{}'",
                    component.data.custom_id
                );
                return;
            };
            let outcome = dispatcher
                .dispatch(&ctx.http, Request::Component(request))
                .await;
            component
                .create_response(&ctx.http, adapter::to_discord(outcome.response, true))
                .await
        }
        Interaction::Modal(modal) => {
            let request = Request::Modal(adapter::modal_request(&modal));
            let outcome = dispatcher.dispatch(&ctx.http, request).await;
            modal
                .create_response(&ctx.http, adapter::to_discord(outcome.response, false))
                .await
        }
        _ => return,
    };

    if let Err(e) = result {
        tracing::error!("Failed to answer interaction: {}", e);
    }
}
