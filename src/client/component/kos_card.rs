use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaLocationDot, FaStar},
    Icon,
};

use crate::{
    client::{component::Price, router::Route},
    model::kos::KosDto,
};

#[component]
pub fn KosCard(kos: KosDto) -> Element {
    let thumbnail = kos.primary_photo.as_ref().map(|p| p.thumbnail_url.clone());
    let rooms_badge = if kos.available_rooms > 0 {
        ("badge-success", format!("{} rooms left", kos.available_rooms))
    } else {
        ("badge-error", "Full".to_string())
    };

    rsx!(
        Link {
            to: Route::KosDetail { id: kos.id },
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            figure {
                class: "h-48 bg-base-300",
                if let Some(src) = thumbnail {
                    img { class: "object-cover w-full h-full", src: "{src}", alt: "{kos.title}" }
                } else {
                    span { class: "opacity-40", "No photo" }
                }
            }
            div {
                class: "card-body p-4 gap-2",
                div {
                    class: "flex gap-2",
                    span { class: "badge badge-outline", "{kos.kos_type.label()}" }
                    span { class: "badge {rooms_badge.0}", "{rooms_badge.1}" }
                }
                h2 { class: "card-title text-base", "{kos.title}" }
                p {
                    class: "flex items-center gap-1 text-sm opacity-70",
                    Icon { width: 12, height: 12, icon: FaLocationDot }
                    "{kos.city}"
                }
                div {
                    class: "flex justify-between items-center",
                    Price { amount: kos.price, suffix: " / month" }
                    if kos.review_count > 0 {
                        span {
                            class: "flex items-center gap-1 text-sm",
                            Icon { width: 12, height: 12, icon: FaStar }
                            "{kos.average_rating:.1} ({kos.review_count})"
                        }
                    }
                }
            }
        }
    )
}
