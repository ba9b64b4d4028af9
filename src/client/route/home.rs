use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Markdown, Page, StatusBadge},
        constant::SITE_NAME,
        format::format_timestamp,
        model::error::ApiError,
    },
    model::{feedback::FeedbackDto, profile::ProfileDto},
};

#[cfg(feature = "web")]
use crate::client::api::me::{get_own_feedback, get_own_profile};

/// Own profile and feedback tickets of the logged in user.
///
/// Both are edited through the bot; the dashboard only shows them.
#[component]
pub fn Home() -> Element {
    let mut profile = use_signal(|| None::<Result<Option<ProfileDto>, ApiError>>);
    let mut feedback = use_signal(|| None::<Result<Vec<FeedbackDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let profile_future = use_resource(get_own_profile);
        let feedback_future = use_resource(get_own_feedback);

        use_effect(move || {
            if let Some(result) = &*profile_future.read() {
                profile.set(Some(result.clone()));
            }
        });
        use_effect(move || {
            if let Some(result) = &*feedback_future.read() {
                feedback.set(Some(result.clone()));
            }
        });
    }

    let error = match (&*profile.read(), &*feedback.read()) {
        (Some(Err(e)), _) | (_, Some(Err(e))) => Some(e.clone()),
        _ => None,
    };

    rsx! {
        Title { "Home | {SITE_NAME}" }
        if let Some(err) = error {
            ErrorPage { status: err.status, message: err.message }
        } else if let (Some(Ok(own_profile)), Some(Ok(tickets))) = (profile(), feedback()) {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-4xl flex flex-col gap-6",
                    ProfileCard { profile: own_profile }
                    TicketList { tickets }
                }
            }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn ProfileCard(profile: Option<ProfileDto>) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Your Profile" }
                if let Some(profile) = profile {
                    p { class: "text-xl font-semibold", "{profile.nickname}" }
                    if let Some(bio) = profile.bio.clone() {
                        Markdown { text: bio, class: "opacity-80" }
                    }
                    if !profile.socials.is_empty() {
                        ul {
                            class: "flex flex-wrap gap-2 mt-2",
                            for social in profile.socials.iter() {
                                li {
                                    key: "{social.id}",
                                    a {
                                        class: "link link-primary",
                                        href: "{social.url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{social.platform}"
                                    }
                                }
                            }
                        }
                    }
                } else {
                    p {
                        class: "opacity-70",
                        "You have no profile yet. Create one with "
                        code { "/profile edit" }
                        " in Discord."
                    }
                }
            }
        }
    }
}

#[component]
fn TicketList(tickets: Vec<FeedbackDto>) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Your Feedback" }
                if tickets.is_empty() {
                    p {
                        class: "opacity-70",
                        "No tickets yet. Send one with "
                        code { "/feedback submit" }
                        "."
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Status" }
                                    th { "Filed" }
                                }
                            }
                            tbody {
                                for ticket in tickets.iter() {
                                    tr {
                                        key: "{ticket.id}",
                                        td { "{ticket.title}" }
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
}
