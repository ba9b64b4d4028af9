use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage},
        constant::SITE_NAME,
        model::error::ApiError,
        route::admin::{AdminPage, AdminTab},
    },
    model::stats::{CounterDto, StatsDto},
};

#[cfg(feature = "web")]
use crate::client::api::stats::get_stats;

/// Counters keep moving while the bot runs, so the page reloads them on a timer.
#[cfg(feature = "web")]
const REFRESH_INTERVAL_MS: u32 = 30_000;

#[component]
pub fn AdminStats() -> Element {
    let mut stats = use_signal(|| None::<Result<StatsDto, ApiError>>);

    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            stats.set(Some(get_stats().await));
            gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
        }
    });

    rsx! {
        Title { "Admin - Statistics | {SITE_NAME}" }
        AdminPage {
            active_tab: AdminTab::Stats,
            match stats() {
                Some(Ok(data)) => rsx! {
                    div {
                        class: "stats shadow mb-6",
                        div {
                            class: "stat",
                            div { class: "stat-title", "Interactions" }
                            div { class: "stat-value", "{data.total}" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Errors" }
                            div { class: "stat-value text-error", "{error_total(&data)}" }
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        CounterTable { title: "Per handler".to_string(), counters: sorted(data.interactions.clone()) }
                        CounterTable { title: "Errors per handler".to_string(), counters: sorted(data.errors.clone()) }
                    }
                },
                Some(Err(err)) => rsx! {
                    ErrorPage { status: err.status, message: err.message }
                },
                None => rsx! { LoadingPage {} },
            }
        }
    }
}

#[component]
fn CounterTable(title: String, counters: Vec<CounterDto>) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "{title}" }
                if counters.is_empty() {
                    p { class: "opacity-50", "Nothing recorded yet" }
                } else {
                    table {
                        class: "table table-zebra w-full",
                        tbody {
                            for counter in counters {
                                tr {
                                    key: "{counter.name}",
                                    td { code { "{counter.name}" } }
                                    td { class: "text-right", "{counter.count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn error_total(stats: &StatsDto) -> i64 {
    stats.errors.iter().map(|c| c.count).sum()
}

/// Busiest first, ties by name.
fn sorted(mut counters: Vec<CounterDto>) -> Vec<CounterDto> {
    counters.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counters
}
