use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Modal, Pagination, PaginationData},
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        format::format_timestamp,
        model::error::ApiError,
        route::admin::{ActionError, ActionState, AdminPage, AdminTab},
    },
    model::profile::{PaginatedProfilesDto, ProfileDto},
};

#[cfg(feature = "web")]
use crate::{
    client::api::profile::{delete_profile, get_profiles, remove_social, update_profile},
    model::profile::UpdateProfileDto,
};

#[component]
pub fn AdminProfiles() -> Element {
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let refetch_trigger = use_signal(|| 0u32);
    let action_error = use_signal(|| None::<String>);
    let mut profiles = use_signal(|| None::<Result<PaginatedProfilesDto, ApiError>>);

    let editing = use_signal(|| None::<ProfileDto>);
    let deleting = use_signal(|| None::<ProfileDto>);

    // Re-runs whenever the page, page size or refetch trigger changes
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_profiles(page(), per_page()).await
        });

        use_effect(move || {
            if let Some(result) = &*future.read() {
                profiles.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Admin - Profiles | {SITE_NAME}" }
        AdminPage {
            active_tab: AdminTab::Profiles,
            ActionError { error: action_error }
            match profiles() {
                Some(Ok(data)) => rsx! {
                    ProfileTable { profiles: data.profiles.clone(), editing, deleting }
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
        EditProfileModal { editing, refetch_trigger, action_error }
        DeleteProfileModal { deleting, refetch_trigger, action_error }
    }
}

#[component]
fn ProfileTable(
    profiles: Vec<ProfileDto>,
    editing: Signal<Option<ProfileDto>>,
    deleting: Signal<Option<ProfileDto>>,
) -> Element {
    if profiles.is_empty() {
        return rsx! {
            div { class: "text-center py-8 opacity-50", "No profiles yet" }
        };
    }

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Nickname" }
                        th { "Discord ID" }
                        th { "Socials" }
                        th { "Updated" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for profile in profiles {
                        {
                            let edit_target = profile.clone();
                            let delete_target = profile.clone();
                            rsx! {
                                tr {
                                    key: "{profile.id}",
                                    td { "{profile.nickname}" }
                                    td { "{profile.discord_id}" }
                                    td { "{profile.socials.len()}" }
                                    td { {format_timestamp(&profile.updated_at)} }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            button {
                                                class: "btn btn-sm",
                                                onclick: move |_| editing.set(Some(edit_target.clone())),
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

/// Nickname and bio form plus the profile's social links, each removable.
#[component]
fn EditProfileModal(
    editing: Signal<Option<ProfileDto>>,
    refetch_trigger: Signal<u32>,
    action_error: Signal<Option<String>>,
) -> Element {
    let mut show = use_signal(|| false);
    let mut nickname = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let is_saving = use_signal(|| false);

    use_effect(move || {
        if let Some(profile) = &*editing.read() {
            nickname.set(profile.nickname.clone());
            bio.set(profile.bio.clone().unwrap_or_default());
            show.set(true);
        }
    });

    use_effect(move || {
        if !show() {
            editing.set(None);
        }
    });

    let Some(profile) = editing() else {
        return rsx! {};
    };
    let profile_id = profile.id.clone();

    rsx! {
        Modal {
            show,
            title: format!("Edit {}", profile.nickname),
            locked: is_saving(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    #[cfg(feature = "web")]
                    save_profile(
                        profile_id.clone(),
                        nickname(),
                        bio(),
                        ActionState { show, busy: is_saving, refetch_trigger, action_error },
                    );
                },
                label {
                    class: "form-control",
                    span { class: "label-text", "Nickname" }
                    input {
                        class: "input input-bordered w-full",
                        maxlength: "32",
                        required: true,
                        value: "{nickname}",
                        oninput: move |evt| nickname.set(evt.value()),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Bio" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        maxlength: "1024",
                        value: "{bio}",
                        oninput: move |evt| bio.set(evt.value()),
                    }
                }
                if !profile.socials.is_empty() {
                    div {
                        class: "flex flex-col gap-2",
                        span { class: "label-text", "Social links" }
                        for social in profile.socials.iter() {
                            SocialRow {
                                key: "{social.id}",
                                profile_id: profile.id.clone(),
                                social_id: social.id.clone(),
                                label: format!("{}: {}", social.platform, social.url),
                                editing,
                                refetch_trigger,
                                action_error,
                            }
                        }
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
fn SocialRow(
    profile_id: String,
    social_id: String,
    label: String,
    editing: Signal<Option<ProfileDto>>,
    refetch_trigger: Signal<u32>,
    action_error: Signal<Option<String>>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between gap-2",
            span { class: "truncate", "{label}" }
            button {
                r#type: "button",
                class: "btn btn-xs btn-error",
                onclick: move |_| {
                    #[cfg(feature = "web")]
                    remove_profile_social(
                        profile_id.clone(),
                        social_id.clone(),
                        editing,
                        refetch_trigger,
                        action_error,
                    );
                },
                "Remove"
            }
        }
    }
}

#[component]
fn DeleteProfileModal(
    deleting: Signal<Option<ProfileDto>>,
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

    let Some(profile) = deleting() else {
        return rsx! {};
    };
    let profile_id = profile.id.clone();

    rsx! {
        ConfirmationModal {
            show,
            title: "Delete Profile".to_string(),
            message: format!("Delete the profile of {} and all of its social links?", profile.nickname),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: move |_| {
                #[cfg(feature = "web")]
                remove_profile(
                    profile_id.clone(),
                    ActionState { show, busy: is_deleting, refetch_trigger, action_error },
                );
            },
        }
    }
}

#[cfg(feature = "web")]
fn save_profile(id: String, nickname: String, bio: String, mut state: ActionState) {
    let payload = UpdateProfileDto {
        nickname,
        bio: Some(bio).filter(|b| !b.trim().is_empty()),
    };

    state.busy.set(true);
    spawn(async move {
        let result = update_profile(&id, payload).await.map(|_| ());
        state.finish(result);
    });
}

#[cfg(feature = "web")]
fn remove_profile(id: String, mut state: ActionState) {
    state.busy.set(true);
    spawn(async move {
        let result = delete_profile(&id).await;
        state.finish(result);
    });
}

#[cfg(feature = "web")]
fn remove_profile_social(
    profile_id: String,
    social_id: String,
    mut editing: Signal<Option<ProfileDto>>,
    mut refetch_trigger: Signal<u32>,
    mut action_error: Signal<Option<String>>,
) {
    spawn(async move {
        match remove_social(&profile_id, &social_id).await {
            Ok(()) => {
                if let Some(profile) = editing.write().as_mut() {
                    profile.socials.retain(|s| s.id != social_id);
                }
                let next = *refetch_trigger.peek() + 1;
                refetch_trigger.set(next);
            }
            Err(err) => action_error.set(Some(err.message)),
        }
    });
}
