use dioxus::prelude::*;

/// Up to five page numbers centred on `current`.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let span = total_pages.min(5);
    let start = current
        .saturating_sub(2)
        .max(1)
        .min(total_pages + 1 - span);
    (start..start + span).collect()
}

#[component]
pub fn Pagination(
    page: u32,
    total_pages: u32,
    total: u64,
    limit: u32,
    on_change: EventHandler<u32>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    let first = u64::from(page.saturating_sub(1)) * u64::from(limit) + 1;
    let last = (u64::from(page) * u64::from(limit)).min(total);

    rsx! {
        div {
            class: "pagination",
            span { class: "pagination-summary", "Showing {first} to {last} of {total} results" }
            div {
                class: "pagination-pages",
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: page <= 1,
                    onclick: move |_| on_change.call(page - 1),
                    "Previous"
                }
                for n in page_window(page, total_pages) {
                    button {
                        key: "{n}",
                        class: if n == page { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                        onclick: move |_| on_change.call(n),
                        "{n}"
                    }
                }
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: page >= total_pages,
                    onclick: move |_| on_change.call(page + 1),
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_stays_in_range() {
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }
}
