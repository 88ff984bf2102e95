use dioxus::prelude::*;

use crate::{
    client::{
        component::{KosCard, Page, Pagination},
        constant::{LISTINGS_PER_PAGE, SITE_NAME},
        model::error::ApiError,
    },
    model::{api::PaginatedDto, favorite::FavoriteDto},
};

#[cfg(feature = "web")]
use crate::client::api::favorite::get_favorites;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Favorites() -> Element {
    let page = use_signal(|| 1u64);
    #[allow(unused_mut)]
    let mut favorites = use_signal(|| None::<Result<PaginatedDto<FavoriteDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_favorites(page(), LISTINGS_PER_PAGE).await });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => favorites.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch favorites: {}", err);
            favorites.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Favorites | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                h1 { class: "text-2xl font-bold", "Saved kos" }
                match favorites() {
                    Some(Ok(data)) => rsx! {
                        if data.items.is_empty() {
                            div {
                                class: "text-center py-16 opacity-50",
                                "Tap the heart on a listing to save it here"
                            }
                        } else {
                            div {
                                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                                for favorite in data.items.iter().cloned() {
                                    KosCard { key: "{favorite.id}", kos: favorite.kos }
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
