use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::UserState, router::Route};

#[cfg(feature = "web")]
use crate::client::api::auth::get_current_user;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Resolve the session cookie into the current user on first load
    #[cfg(feature = "web")]
    let future = use_resource(get_current_user);

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = &*future.read_unchecked() {
            let user = match result {
                Ok(user) => user.clone(),
                Err(err) => {
                    tracing::error!("Failed to fetch current user: {}", err);
                    None
                }
            };
            user_state.set(UserState {
                user,
                fetched: true,
            });
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Find and book a kos near your campus or office"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
