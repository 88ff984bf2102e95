use dioxus::prelude::*;

/// Previous/next controls over 1-based pages.
#[component]
pub fn Pagination(mut page: Signal<u64>, total: u64, total_pages: u64) -> Element {
    if total_pages <= 1 {
        return rsx!();
    }

    let current = page();

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-6 gap-2",
            span {
                class: "text-xs sm:text-sm opacity-70",
                "{total} results"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-sm",
                    disabled: current <= 1,
                    onclick: move |_| {
                        if page() > 1 {
                            page.set(page() - 1);
                        }
                    },
                    "«"
                }
                button {
                    class: "join-item btn btn-sm btn-disabled",
                    "Page {current} of {total_pages}"
                }
                button {
                    class: "join-item btn btn-sm",
                    disabled: current >= total_pages,
                    onclick: move |_| {
                        if page() < total_pages {
                            page.set(page() + 1);
                        }
                    },
                    "»"
                }
            }
        }
    )
}
