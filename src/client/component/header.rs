use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthState, router::Route};

/// Top bar: site name, and session controls once `/api/auth/user` has answered.
#[component]
pub fn Header() -> Element {
    let auth = use_context::<Signal<AuthState>>();

    let session_controls = match auth() {
        AuthState::Initializing => rsx! {},
        AuthState::Authenticated(user) => rsx! {
            span { class: "hidden sm:inline opacity-70 mr-2", "{user.name}" }
            if user.admin {
                Link { to: Route::AdminProfiles {}, class: "btn btn-ghost", "Admin" }
            }
            a { href: "/api/auth/logout", class: "btn btn-outline", "Logout" }
        },
        AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
            a {
                href: "/api/auth/login",
                class: "btn btn-primary gap-2",
                Icon { width: 20, height: 20, icon: FaDiscord }
                "Login with Discord"
            }
        },
    };

    rsx! {
        nav {
            class: "navbar fixed top-0 h-20 px-4 bg-base-200 shadow-sm z-20",
            div {
                class: "flex-1",
                Link {
                    to: Route::Home {},
                    class: "text-xl font-semibold tracking-wide",
                    {SITE_NAME}
                }
            }
            div { class: "flex-none flex items-center gap-2", {session_controls} }
        }
    }
}
