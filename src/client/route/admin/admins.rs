use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Pagination, PaginationData},
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        model::{auth::AuthState, error::ApiError},
        route::admin::{ActionError, ActionState, AdminPage, AdminTab},
    },
    model::user::{PaginatedUsersDto, UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::user::{add_admin, get_all_admins, get_all_users, remove_admin};

/// Current admins, and every user who ever logged in with a button to promote them.
#[component]
pub fn AdminAdmins() -> Element {
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let refetch_trigger = use_signal(|| 0u32);
    let action_error = use_signal(|| None::<String>);
    let mut admins = use_signal(|| None::<Result<Vec<UserDto>, ApiError>>);
    let mut users = use_signal(|| None::<Result<PaginatedUsersDto, ApiError>>);
    let removing = use_signal(|| None::<UserDto>);

    #[cfg(feature = "web")]
    {
        let admins_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_all_admins().await
        });
        let users_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_all_users(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = &*admins_future.read() {
                admins.set(Some(result.clone()));
            }
        });
        use_effect(move || {
            if let Some(result) = &*users_future.read() {
                users.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Admin - Admins | {SITE_NAME}" }
        AdminPage {
            active_tab: AdminTab::Admins,
            ActionError { error: action_error }
            match (admins(), users()) {
                (Some(Err(err)), _) | (_, Some(Err(err))) => rsx! {
                    ErrorPage { status: err.status, message: err.message }
                },
                (Some(Ok(admin_list)), Some(Ok(user_page))) => rsx! {
                    div {
                        class: "card bg-base-200 mb-6",
                        div {
                            class: "card-body",
                            h2 { class: "card-title", "Admins" }
                            AdminList { admins: admin_list, removing }
                        }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            h2 { class: "card-title", "Users" }
                            UserList { users: user_page.users.clone(), refetch_trigger, action_error }
                            Pagination {
                                page,
                                per_page,
                                data: PaginationData {
                                    page: user_page.page,
                                    per_page: user_page.per_page,
                                    total: user_page.total,
                                    total_pages: user_page.total_pages,
                                }
                            }
                        }
                    }
                },
                _ => rsx! { LoadingPage {} },
            }
        }
        RemoveAdminModal { removing, refetch_trigger, action_error }
    }
}

#[component]
fn AdminList(admins: Vec<UserDto>, removing: Signal<Option<UserDto>>) -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let current_user_id = auth.read().user().map(|u| u.discord_id);

    rsx! {
        table {
            class: "table table-zebra w-full",
            thead {
                tr {
                    th { "Name" }
                    th { "Discord ID" }
                    th { class: "text-right", "Actions" }
                }
            }
            tbody {
                for admin in admins {
                    {
                        let is_current_user = Some(admin.discord_id) == current_user_id;
                        let target = admin.clone();
                        rsx! {
                            tr {
                                key: "{admin.discord_id}",
                                td {
                                    div {
                                        class: "flex items-center gap-2",
                                        span { "{admin.name}" }
                                        if is_current_user {
                                            span { class: "badge badge-sm badge-primary", "You" }
                                        }
                                    }
                                }
                                td { "{admin.discord_id}" }
                                td {
                                    class: "text-right",
                                    button {
                                        class: "btn btn-sm btn-error",
                                        disabled: is_current_user,
                                        onclick: move |_| removing.set(Some(target.clone())),
                                        "Remove Admin"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserList(
    users: Vec<UserDto>,
    refetch_trigger: Signal<u32>,
    action_error: Signal<Option<String>>,
) -> Element {
    let is_busy = use_signal(|| false);
    // Promotion has no modal; `show` only satisfies ActionState.
    let unused_modal = use_signal(|| false);

    rsx! {
        table {
            class: "table table-zebra w-full",
            thead {
                tr {
                    th { "Name" }
                    th { "Discord ID" }
                    th { class: "text-right", "Actions" }
                }
            }
            tbody {
                for user in users {
                    {
                        let discord_id = user.discord_id;
                        rsx! {
                            tr {
                                key: "{user.discord_id}",
                                td { "{user.name}" }
                                td { "{user.discord_id}" }
                                td {
                                    class: "text-right",
                                    if user.admin {
                                        span { class: "badge badge-primary", "Admin" }
                                    } else {
                                        button {
                                            class: "btn btn-sm btn-primary",
                                            disabled: is_busy(),
                                            onclick: move |_| {
                                                #[cfg(feature = "web")]
                                                promote(
                                                    discord_id,
                                                    ActionState {
                                                        show: unused_modal,
                                                        busy: is_busy,
                                                        refetch_trigger,
                                                        action_error,
                                                    },
                                                );
                                            },
                                            "Make Admin"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RemoveAdminModal(
    removing: Signal<Option<UserDto>>,
    refetch_trigger: Signal<u32>,
    action_error: Signal<Option<String>>,
) -> Element {
    let mut show = use_signal(|| false);
    let is_removing = use_signal(|| false);

    use_effect(move || {
        if removing.read().is_some() {
            show.set(true);
        }
    });

    use_effect(move || {
        if !show() {
            removing.set(None);
        }
    });

    let Some(user) = removing() else {
        return rsx! {};
    };
    let discord_id = user.discord_id;

    rsx! {
        ConfirmationModal {
            show,
            title: "Remove Admin".to_string(),
            message: format!("Revoke admin access from {}?", user.name),
            confirm_text: "Remove".to_string(),
            is_processing: is_removing(),
            on_confirm: move |_| {
                #[cfg(feature = "web")]
                demote(
                    discord_id,
                    ActionState { show, busy: is_removing, refetch_trigger, action_error },
                );
            },
        }
    }
}

#[cfg(feature = "web")]
fn promote(discord_id: u64, mut state: ActionState) {
    state.busy.set(true);
    spawn(async move {
        let result = add_admin(discord_id).await;
        state.finish(result);
    });
}

#[cfg(feature = "web")]
fn demote(discord_id: u64, mut state: ActionState) {
    state.busy.set(true);
    spawn(async move {
        let result = remove_admin(discord_id).await;
        state.finish(result);
    });
}
