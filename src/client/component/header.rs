use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCalendarCheck, FaChartColumn, FaHeart, FaHouse},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::UserState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Header() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let nav = navigator();

    let state = user_state();
    let user_name = state.user.as_ref().map(|u| u.name.clone());

    let on_logout = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = logout().await {
                tracing::error!("Failed to log out: {}", err);
            }
            user_state.set(UserState {
                user: None,
                fetched: true,
            });
            nav.push(Route::Home {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                class: "flex items-center gap-3",
                Icon { width: 28, height: 28, icon: FaHouse }
                p {
                    class: "md:text-xl font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if state.fetched && state.is_logged_in() {
                if state.is_admin() {
                    Link {
                        to: Route::AdminStats {},
                        class: "btn btn-ghost gap-2",
                        Icon { width: 18, height: 18, icon: FaChartColumn }
                        span { class: "hidden md:inline", "Admin" }
                    }
                }
                Link {
                    to: Route::Favorites {},
                    class: "btn btn-ghost gap-2",
                    Icon { width: 18, height: 18, icon: FaHeart }
                    span { class: "hidden md:inline", "Favorites" }
                }
                Link {
                    to: Route::Bookings {},
                    class: "btn btn-ghost gap-2",
                    Icon { width: 18, height: 18, icon: FaCalendarCheck }
                    span { class: "hidden md:inline", "Bookings" }
                }
                if let Some(name) = user_name {
                    span { class: "hidden lg:inline opacity-70 px-2", "{name}" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_logout,
                    "Logout"
                }
            } else if state.fetched {
                Link {
                    to: Route::Login {},
                    class: "btn btn-ghost",
                    "Login"
                }
                Link {
                    to: Route::Register {},
                    class: "btn btn-primary",
                    "Register"
                }
            }
        }
    })
}
