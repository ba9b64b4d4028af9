use dioxus::prelude::*;

/// DaisyUI dialog bound to `show`.
///
/// Escape, the close button and a click on the backdrop all dismiss it, except while
/// `locked` (a request is in flight).
#[component]
pub fn Modal(show: Signal<bool>, title: String, locked: bool, children: Element) -> Element {
    let mut dismiss = move || {
        if !locked {
            show.set(false);
        }
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            // keydown only reaches the dialog while it has focus
            document::eval("document.querySelector('.modal-open')?.focus()");
        }
    });

    let class = if show() { "modal modal-open" } else { "modal" };

    rsx! {
        div {
            class: "{class}",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    dismiss();
                }
            },
            div {
                class: "modal-box w-11/12 max-w-lg",
                header {
                    class: "flex items-center justify-between mb-4",
                    h3 { class: "text-lg font-bold", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        disabled: locked,
                        onclick: move |_| dismiss(),
                        "✕"
                    }
                }
                {children}
            }
            div { class: "modal-backdrop", onclick: move |_| dismiss() }
        }
    }
}

/// Yes/no prompt in front of a destructive action.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            show,
            title,
            locked: is_processing,
            p { class: "py-2", "{message}" }
            div {
                class: "modal-action",
                button {
                    class: "btn btn-ghost",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    class: "btn btn-error",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "{confirm_text}"
                }
            }
        }
    }
}
