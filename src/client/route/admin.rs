use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        component::Page,
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::stats::AdminStatsDto,
};

#[cfg(feature = "web")]
use crate::client::api::stats::get_stats;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
fn Stat(title: &'static str, value: u64, detail: Option<String>) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            if let Some(detail) = detail {
                div { class: "stat-desc", "{detail}" }
            }
        }
    }
}

#[component]
pub fn AdminStats() -> Element {
    #[allow(unused_mut)]
    let mut stats = use_signal(|| None::<Result<AdminStatsDto, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(get_stats);

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => stats.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch stats: {}", err);
            stats.set(Some(Err(err.clone())));
        }
        None => (),
    });

    match stats() {
        Some(Ok(data)) => rsx! {
            Title { "Admin | {SITE_NAME}" }
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-5xl flex flex-col gap-6",
                    h1 { class: "text-2xl font-bold", "Platform overview" }
                    div {
                        class: "stats stats-vertical lg:stats-horizontal bg-base-200",
                        Stat {
                            title: "Users",
                            value: data.users.total,
                            detail: format!(
                                "{} sellers · {} renters · {} admins",
                                data.users.seller, data.users.renter, data.users.admin
                            ),
                        }
                        Stat { title: "Active listings", value: data.active_listings }
                        Stat { title: "Reviews", value: data.total_reviews }
                        Stat { title: "Favorites", value: data.total_favorites }
                    }
                    div {
                        class: "stats stats-vertical lg:stats-horizontal bg-base-200",
                        Stat { title: "Bookings", value: data.bookings.total }
                        Stat { title: "Pending", value: data.bookings.pending }
                        Stat { title: "Confirmed", value: data.bookings.confirmed }
                        Stat { title: "Completed", value: data.bookings.completed }
                        Stat { title: "Cancelled", value: data.bookings.cancelled }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            ErrorPage { status: err.status, message: err.message }
        },
        None => rsx! {
            LoadingPage {}
        },
    }
}
