//! Admin pages, one tab per resource.

pub mod admins;
pub mod feedback;
pub mod phrases;
pub mod profiles;
pub mod stats;

pub use admins::AdminAdmins;
pub use feedback::AdminFeedback;
pub use phrases::AdminPhrases;
pub use profiles::AdminProfiles;
pub use stats::AdminStats;

use dioxus::prelude::*;

use crate::client::{component::Page, model::error::ApiError, router::Route};

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Profiles,
    Feedback,
    Phrases,
    Admins,
    Stats,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Profiles,
        AdminTab::Feedback,
        AdminTab::Phrases,
        AdminTab::Admins,
        AdminTab::Stats,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Profiles => "Profiles",
            AdminTab::Feedback => "Feedback",
            AdminTab::Phrases => "Phrases",
            AdminTab::Admins => "Admins",
            AdminTab::Stats => "Statistics",
        }
    }

    fn route(&self) -> Route {
        match self {
            AdminTab::Profiles => Route::AdminProfiles {},
            AdminTab::Feedback => Route::AdminFeedback {},
            AdminTab::Phrases => Route::AdminPhrases {},
            AdminTab::Admins => Route::AdminAdmins {},
            AdminTab::Stats => Route::AdminStats {},
        }
    }
}

/// Shared frame of every admin page: heading, tab bar and the page content.
#[component]
pub fn AdminPage(active_tab: AdminTab, children: Element) -> Element {
    rsx! {
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Admin Panel" }
                div {
                    role: "tablist",
                    class: "tabs tabs-boxed mb-6",
                    for tab in AdminTab::ALL {
                        Link {
                            to: tab.route(),
                            class: if tab == active_tab { "tab tab-active" } else { "tab" },
                            {tab.label()}
                        }
                    }
                }
                {children}
            }
        }
    }
}

/// Inline error line shown above a table after a failed action.
#[component]
pub fn ActionError(error: Signal<Option<String>>) -> Element {
    rsx! {
        if let Some(message) = error() {
            div {
                role: "alert",
                class: "alert alert-error mb-4 flex justify-between",
                span { "{message}" }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| error.set(None),
                    "✕"
                }
            }
        }
    }
}

/// Signals a modal action touches: the modal, its busy flag, the table refetch and the
/// error line.
#[derive(Clone, Copy)]
pub struct ActionState {
    pub show: Signal<bool>,
    pub busy: Signal<bool>,
    pub refetch_trigger: Signal<u32>,
    pub action_error: Signal<Option<String>>,
}

impl ActionState {
    /// Ends the action: closes the modal on success, reports the error otherwise, and
    /// refetches the table either way.
    pub fn finish(mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.show.set(false),
            Err(err) => self.action_error.set(Some(err.message)),
        }
        self.busy.set(false);
        let next = *self.refetch_trigger.peek() + 1;
        self.refetch_trigger.set(next);
    }
}
