use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationData {
    /// 1-based range of the entries on the current page, `(0, 0)` when empty.
    pub fn shown_range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let first = self.page * self.per_page + 1;
        let last = ((self.page + 1) * self.per_page).min(self.total);
        (first, last)
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

/// Page size selector plus previous/next buttons; writes straight into the signals.
#[component]
pub fn Pagination(page: Signal<u64>, per_page: Signal<u64>, data: PaginationData) -> Element {
    let (first, last) = data.shown_range();
    let has_next = data.has_next();
    let total_pages = data.total_pages.max(1);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Show" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            per_page.set(value);
                            page.set(0);
                        }
                    },
                    for size in [10u64, 25, 50, 100] {
                        option { value: "{size}", "{size}" }
                    }
                }
                span { "entries" }
            }
            div {
                class: "flex items-center gap-4",
                span {
                    class: "text-sm opacity-70 whitespace-nowrap",
                    "Showing {first} to {last} of {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-sm",
                        disabled: data.page == 0,
                        onclick: move |_| page.set(page().saturating_sub(1)),
                        "«"
                    }
                    button {
                        class: "join-item btn btn-sm btn-disabled",
                        "Page {data.page + 1} of {total_pages}"
                    }
                    button {
                        class: "join-item btn btn-sm",
                        disabled: !has_next,
                        onclick: move |_| page.set(page() + 1),
                        "»"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_of_last_partial_page() {
        let data = PaginationData {
            page: 2,
            per_page: 10,
            total: 25,
            total_pages: 3,
        };
        assert_eq!(data.shown_range(), (21, 25));
        assert!(!data.has_next());
    }

    #[test]
    fn empty_range() {
        let data = PaginationData {
            page: 0,
            per_page: 10,
            total: 0,
            total_pages: 0,
        };
        assert_eq!(data.shown_range(), (0, 0));
        assert!(!data.has_next());
    }
}
