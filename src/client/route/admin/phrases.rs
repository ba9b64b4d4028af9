use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Modal, Pagination, PaginationData},
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        format::format_timestamp,
        model::error::ApiError,
        route::admin::{ActionError, ActionState, AdminPage, AdminTab},
    },
    model::phrase::{PaginatedPhrasesDto, PhraseDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::phrase::{create_phrase, delete_phrase, get_phrases, update_phrase},
    model::phrase::{CreatePhraseDto, UpdatePhraseDto},
};

/// Which phrase the form modal writes to; `New` creates one.
#[derive(Clone, PartialEq)]
enum FormTarget {
    New,
    Existing(PhraseDto),
}

#[component]
pub fn AdminPhrases() -> Element {
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let refetch_trigger = use_signal(|| 0u32);
    let action_error = use_signal(|| None::<String>);
    let mut phrases = use_signal(|| None::<Result<PaginatedPhrasesDto, ApiError>>);

    let mut form_target = use_signal(|| None::<FormTarget>);
    let deleting = use_signal(|| None::<PhraseDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_phrases(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                phrases.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Admin - Phrases | {SITE_NAME}" }
        AdminPage {
            active_tab: AdminTab::Phrases,
            ActionError { error: action_error }
            div {
                class: "flex items-center justify-between gap-4 mb-6",
                h2 { class: "text-lg font-semibold", "Phrases" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| form_target.set(Some(FormTarget::New)),
                    "Add Phrase"
                }
            }
            match phrases() {
                Some(Ok(data)) => rsx! {
                    PhraseTable { phrases: data.phrases.clone(), form_target, deleting }
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
        PhraseFormModal { form_target, refetch_trigger, action_error }
        DeletePhraseModal { deleting, refetch_trigger, action_error }
    }
}

#[component]
fn PhraseTable(
    phrases: Vec<PhraseDto>,
    form_target: Signal<Option<FormTarget>>,
    deleting: Signal<Option<PhraseDto>>,
) -> Element {
    if phrases.is_empty() {
        return rsx! {
            div { class: "text-center py-8 opacity-50", "No phrases yet" }
        };
    }

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Phrase" }
                        th { "Source" }
                        th { "Added" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for phrase in phrases {
                        {
                            let edit_target = phrase.clone();
                            let delete_target = phrase.clone();
                            let source = phrase.source.clone().unwrap_or_else(|| "-".to_string());
                            rsx! {
                                tr {
                                    key: "{phrase.id}",
                                    td { class: "max-w-md whitespace-pre-wrap", "{phrase.content}" }
                                    td { "{source}" }
                                    td { {format_timestamp(&phrase.created_at)} }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            button {
                                                class: "btn btn-sm",
                                                onclick: move |_| form_target.set(Some(FormTarget::Existing(edit_target.clone()))),
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-sm btn-error",
                                                onclick: move |_| deleting.set(Some(delete_target.clone())),
                                                "Delete"
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
}

#[component]
fn PhraseFormModal(
    form_target: Signal<Option<FormTarget>>,
    refetch_trigger: Signal<u32>,
    action_error: Signal<Option<String>>,
) -> Element {
    let mut show = use_signal(|| false);
    let mut content = use_signal(String::new);
    let mut source = use_signal(String::new);
    let is_saving = use_signal(|| false);

    use_effect(move || match &*form_target.read() {
        Some(FormTarget::New) => {
            content.set(String::new());
            source.set(String::new());
            show.set(true);
        }
        Some(FormTarget::Existing(phrase)) => {
            content.set(phrase.content.clone());
            source.set(phrase.source.clone().unwrap_or_default());
            show.set(true);
        }
        None => {}
    });

    use_effect(move || {
        if !show() {
            form_target.set(None);
        }
    });

    let Some(target) = form_target() else {
        return rsx! {};
    };
    let title = match &target {
        FormTarget::New => "Add Phrase".to_string(),
        FormTarget::Existing(_) => "Edit Phrase".to_string(),
    };

    rsx! {
        Modal {
            show,
            title,
            locked: is_saving(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    #[cfg(feature = "web")]
                    save_phrase(
                        target.clone(),
                        content(),
                        source(),
                        ActionState { show, busy: is_saving, refetch_trigger, action_error },
                    );
                },
                label {
                    class: "form-control",
                    span { class: "label-text", "Phrase" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        maxlength: "500",
                        required: true,
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Source (optional)" }
                    input {
                        class: "input input-bordered w-full",
                        maxlength: "100",
                        value: "{source}",
                        oninput: move |evt| source.set(evt.value()),
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_saving(),
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
fn DeletePhraseModal(
    deleting: Signal<Option<PhraseDto>>,
    refetch_trigger: Signal<u32>,
    action_error: Signal<Option<String>>,
) -> Element {
    let mut show = use_signal(|| false);
    let is_deleting = use_signal(|| false);

    use_effect(move || {
        if deleting.read().is_some() {
            show.set(true);
        }
    });

    use_effect(move || {
        if !show() {
            deleting.set(None);
        }
    });

    let Some(phrase) = deleting() else {
        return rsx! {};
    };
    let phrase_id = phrase.id.clone();

    rsx! {
        ConfirmationModal {
            show,
            title: "Delete Phrase".to_string(),
            message: format!("Delete \"{}\"?", phrase.content),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: move |_| {
                #[cfg(feature = "web")]
                remove_phrase(
                    phrase_id.clone(),
                    ActionState { show, busy: is_deleting, refetch_trigger, action_error },
                );
            },
        }
    }
}

#[cfg(feature = "web")]
fn save_phrase(target: FormTarget, content: String, source: String, mut state: ActionState) {
    let source = Some(source).filter(|s| !s.trim().is_empty());

    state.busy.set(true);
    spawn(async move {
        let result = match target {
            FormTarget::New => create_phrase(CreatePhraseDto { content, source })
                .await
                .map(|_| ()),
            FormTarget::Existing(phrase) => {
                update_phrase(&phrase.id, UpdatePhraseDto { content, source })
                    .await
                    .map(|_| ())
            }
        };
        state.finish(result);
    });
}

#[cfg(feature = "web")]
fn remove_phrase(id: String, mut state: ActionState) {
    state.busy.set(true);
    spawn(async move {
        let result = delete_phrase(&id).await;
        state.finish(result);
    });
}
