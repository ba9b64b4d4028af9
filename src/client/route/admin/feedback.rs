use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            ErrorPage, LoadingPage, Markdown, Modal, Pagination, PaginationData, StatusBadge,
        },
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        format::format_timestamp,
        model::error::ApiError,
        route::admin::{ActionError, ActionState, AdminPage, AdminTab},
    },
    model::feedback::{FeedbackDto, FeedbackStatus, PaginatedFeedbackDto},
};

#[cfg(feature = "web")]
use crate::client::api::feedback::{delete_feedback, get_feedback, update_feedback_status};

#[component]
pub fn AdminFeedback() -> Element {
    let mut page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let mut status_filter = use_signal(|| None::<FeedbackStatus>);
    let refetch_trigger = use_signal(|| 0u32);
    let action_error = use_signal(|| None::<String>);
    let mut feedback = use_signal(|| None::<Result<PaginatedFeedbackDto, ApiError>>);
    let selected = use_signal(|| None::<FeedbackDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_feedback(page(), per_page(), status_filter()).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                feedback.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Admin - Feedback | {SITE_NAME}" }
        AdminPage {
            active_tab: AdminTab::Feedback,
            ActionError { error: action_error }
            div {
                class: "flex items-center gap-2 mb-4",
                span { class: "text-sm", "Status" }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        status_filter.set(evt.value().parse::<FeedbackStatus>().ok());
                        page.set(0);
                    },
                    option { value: "", "All" }
                    for status in FeedbackStatus::ALL {
                        option { value: "{status.as_str()}", "{status.label()}" }
                    }
                }
            }
            match feedback() {
                Some(Ok(data)) => rsx! {
                    FeedbackTable { tickets: data.feedback.clone(), selected }
                    Pagination {
                        page,
                        per_page,
                        data: PaginationData {
                            page: data.page,
                            per_page: data.per_page,
                            total: data.total,
                            total_pages: data.total_pages,
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    ErrorPage { status: err.status, message: err.message }
                },
                None => rsx! { LoadingPage {} },
            }
        }
        FeedbackModal { selected, refetch_trigger, action_error }
    }
}

#[component]
fn FeedbackTable(tickets: Vec<FeedbackDto>, selected: Signal<Option<FeedbackDto>>) -> Element {
    if tickets.is_empty() {
        return rsx! {
            div { class: "text-center py-8 opacity-50", "No feedback found" }
        };
    }

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Title" }
                        th { "Author" }
                        th { "Status" }
                        th { "Filed" }
                    }
                }
                tbody {
                    for ticket in tickets {
                        {
                            let target = ticket.clone();
                            rsx! {
                                tr {
                                    key: "{ticket.id}",
                                    class: "hover cursor-pointer",
                                    onclick: move |_| selected.set(Some(target.clone())),
                                    td { "{ticket.title}" }
                                    td { "{ticket.discord_id}" }
                                    td { StatusBadge { status: ticket.status } }
                                    td { {format_timestamp(&ticket.created_at)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Ticket details with one button per allowed status transition.
#[component]
fn FeedbackModal(
    selected: Signal<Option<FeedbackDto>>,
    refetch_trigger: Signal<u32>,
    action_error: Signal<Option<String>>,
) -> Element {
    let mut show = use_signal(|| false);
    let is_busy = use_signal(|| false);

    use_effect(move || {
        if selected.read().is_some() {
            show.set(true);
        }
    });

    use_effect(move || {
        if !show() {
            selected.set(None);
        }
    });

    let Some(ticket) = selected() else {
        return rsx! {};
    };
    let state = ActionState {
        show,
        busy: is_busy,
        refetch_trigger,
        action_error,
    };

    rsx! {
        Modal {
            show,
            title: ticket.title.clone(),
            locked: is_busy(),
            div {
                class: "flex flex-col gap-3",
                div {
                    class: "flex items-center gap-2 text-sm opacity-70",
                    StatusBadge { status: ticket.status }
                    span { "by {ticket.discord_id}" }
                    span { {format_timestamp(&ticket.created_at)} }
                }
                Markdown { text: ticket.content.clone(), class: "bg-base-200 p-3 rounded" }
                if ticket.status.is_terminal() {
                    p { class: "text-sm opacity-70", "This ticket is closed." }
                }
                div {
                    class: "modal-action flex-wrap",
                    for next in ticket.status.next_statuses().iter().copied() {
                        {
                            let id = ticket.id.clone();
                            rsx! {
                                button {
                                    key: "{next.as_str()}",
                                    class: "btn btn-sm btn-primary",
                                    disabled: is_busy(),
                                    onclick: move |_| {
                                        #[cfg(feature = "web")]
                                        transition(id.clone(), next, state);
                                    },
                                    "Mark {next.label()}"
                                }
                            }
                        }
                    }
                    {
                        let id = ticket.id.clone();
                        rsx! {
                            button {
                                class: "btn btn-sm btn-error",
                                disabled: is_busy(),
                                onclick: move |_| {
                                    #[cfg(feature = "web")]
                                    remove(id.clone(), state);
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(feature = "web")]
fn transition(id: String, next: FeedbackStatus, mut state: ActionState) {
    state.busy.set(true);
    spawn(async move {
        let result = update_feedback_status(&id, next).await.map(|_| ());
        state.finish(result);
    });
}

#[cfg(feature = "web")]
fn remove(id: String, mut state: ActionState) {
    state.busy.set(true);
    spawn(async move {
        let result = delete_feedback(&id).await;
        state.finish(result);
    });
}
