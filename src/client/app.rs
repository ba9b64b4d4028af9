use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::user::get_user;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let auth = use_context_provider(|| Signal::new(AuthState::Initializing));

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let mut auth = auth;
        let user = use_resource(get_user);
        use_effect(move || {
            if let Some(result) = &*user.read() {
                auth.set(match result {
                    Ok(user) => AuthState::from(user.clone()),
                    Err(e) => AuthState::Error(e.clone()),
                });
            }
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = auth;

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Dashboard of the Wren Discord bot"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
