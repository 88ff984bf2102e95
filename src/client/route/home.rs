use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMagnifyingGlass, Icon};

use crate::{
    client::{
        component::{KosCard, Page, Pagination},
        constant::{LISTINGS_PER_PAGE, SITE_NAME},
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        kos::{KosDto, KosListQuery, KosSort, KosType},
    },
};

#[cfg(feature = "web")]
use crate::client::api::kos::search_kos;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Filter form state. Applied to the query only on submit.
#[derive(Clone, Default, PartialEq)]
struct SearchForm {
    q: String,
    city: String,
    kos_type: Option<KosType>,
    min_price: String,
    max_price: String,
    available_only: bool,
    sort: KosSort,
}

impl SearchForm {
    fn to_query(&self, page: u64) -> KosListQuery {
        let text = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        KosListQuery {
            page: Some(page),
            per_page: Some(LISTINGS_PER_PAGE),
            q: text(&self.q),
            city: text(&self.city),
            kos_type: self.kos_type,
            min_price: self.min_price.trim().parse().ok(),
            max_price: self.max_price.trim().parse().ok(),
            available_only: self.available_only.then_some(true),
            sort: Some(self.sort),
        }
    }
}

#[component]
pub fn Home() -> Element {
    let mut form = use_signal(SearchForm::default);
    let mut applied = use_signal(SearchForm::default);
    let mut page = use_signal(|| 1u64);
    #[allow(unused_mut)]
    let mut listings = use_signal(|| None::<Result<PaginatedDto<KosDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { search_kos(applied().to_query(page())).await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => listings.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to search kos: {}", err);
            listings.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "{SITE_NAME} | Find a kos" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                form {
                    class: "card bg-base-200 p-4 grid grid-cols-1 md:grid-cols-4 gap-3",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        applied.set(form());
                        page.set(1);
                    },
                    input {
                        class: "input input-bordered md:col-span-2",
                        placeholder: "Search title or address",
                        value: "{form().q}",
                        oninput: move |evt| form.write().q = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "City",
                        value: "{form().city}",
                        oninput: move |evt| form.write().city = evt.value(),
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| form.write().kos_type = KosType::parse(&evt.value()),
                        option { value: "", "Any type" }
                        for kos_type in KosType::ALL {
                            option {
                                value: "{kos_type.as_str()}",
                                selected: form().kos_type == Some(kos_type),
                                "{kos_type.label()}"
                            }
                        }
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        min: "0",
                        placeholder: "Min price",
                        value: "{form().min_price}",
                        oninput: move |evt| form.write().min_price = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "number",
                        min: "0",
                        placeholder: "Max price",
                        value: "{form().max_price}",
                        oninput: move |evt| form.write().max_price = evt.value(),
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            let value = evt.value();
                            form.write().sort = KosSort::ALL
                                .into_iter()
                                .find(|sort| sort.as_str() == value)
                                .unwrap_or_default();
                        },
                        for sort in KosSort::ALL {
                            option {
                                value: "{sort.as_str()}",
                                selected: form().sort == sort,
                                "{sort.label()}"
                            }
                        }
                    }
                    div {
                        class: "flex items-center justify-between gap-2",
                        label {
                            class: "label cursor-pointer gap-2",
                            input {
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: form().available_only,
                                onchange: move |evt| form.write().available_only = evt.checked(),
                            }
                            span { class: "label-text", "Available only" }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary gap-2",
                            Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                            "Search"
                        }
                    }
                }

                match listings() {
                    Some(Ok(data)) => rsx! {
                        if data.items.is_empty() {
                            div {
                                class: "text-center py-16 opacity-50",
                                "No kos match your search"
                            }
                        } else {
                            div {
                                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                                for kos in data.items.iter().cloned() {
                                    KosCard { key: "{kos.id}", kos }
                                }
                            }
                            Pagination { page, total: data.total, total_pages: data.total_pages }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "{err.message}" }
                    },
                    None => rsx! {
                        div {
                            class: "flex justify-center py-16",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                }
            }
        }
    }
}
