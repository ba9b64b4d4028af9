use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthState, Permission},
    router::Route,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn, Permission::Admin] }
    }
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let nav = navigator();

    let fetch_completed = auth.read().is_fetched();
    let user_logged_in = auth.read().user().is_some();
    let has_required_permissions = auth.read().has_all_permissions(&permissions);

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {}
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page".to_string() }
        } else if has_required_permissions {
            Outlet::<Route> {}
        }
        // Logged out: nothing while the effect redirects
    }
}
