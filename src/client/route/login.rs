use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::{LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::AuthState,
    router::Route,
};

/// Landing page for anonymous visitors. Logged in users are sent straight home.
#[component]
pub fn Login() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = navigator();

    use_effect(move || {
        if auth.read().user().is_some() {
            nav.replace(Route::Home {});
        }
    });

    let check_failed = match auth() {
        AuthState::Initializing | AuthState::Authenticated(_) => {
            return rsx! { LoadingPage {} };
        }
        AuthState::Error(err) => Some(err.message),
        AuthState::NotLoggedIn => None,
    };

    rsx! {
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "hero",
            div {
                class: "hero-content flex-col text-center gap-6",
                h1 { class: "text-4xl font-bold", {SITE_NAME} }
                p {
                    class: "max-w-md opacity-70",
                    "Edit your community profile and follow the feedback you sent through the bot."
                }
                if let Some(message) = check_failed {
                    div { role: "alert", class: "alert alert-warning", "{message}" }
                }
                a {
                    href: "/api/auth/login",
                    class: "btn btn-primary gap-2",
                    Icon { width: 24, height: 24, icon: FaDiscord }
                    "Login with Discord"
                }
            }
        }
    }
}
