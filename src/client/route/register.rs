use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::LoadingPage, Page},
        constant::SITE_NAME,
        model::auth::UserState,
        router::Route,
    },
    model::user::UserRole,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::register, model::user::RegisterDto};

#[component]
pub fn Register() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Renter);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if user_state().is_logged_in() {
            nav.push(Route::Home {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        spawn(async move {
            is_submitting.set(true);
            let contact = contact().trim().to_string();
            let payload = RegisterDto {
                name: name().trim().to_string(),
                username: username().trim().to_string(),
                password: password(),
                contact: (!contact.is_empty()).then_some(contact),
                role: Some(role()),
            };
            match register(payload).await {
                Ok(session) => {
                    user_state.set(UserState {
                        user: Some(session.user),
                        fetched: true,
                    });
                }
                Err(err) => error.set(Some(err.message)),
            }
            is_submitting.set(false);
        });
    };

    if !user_state().fetched {
        return rsx! { LoadingPage {} };
    }

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            form {
                class: "card bg-base-200 w-full max-w-sm",
                onsubmit: on_submit,
                div {
                    class: "card-body gap-3",
                    h1 { class: "card-title text-2xl", "Create an account" }
                    input {
                        class: "input input-bordered",
                        placeholder: "Full name",
                        value: "{name()}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Username",
                        autocomplete: "username",
                        value: "{username()}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered",
                        r#type: "password",
                        placeholder: "Password (min. 8 characters)",
                        autocomplete: "new-password",
                        value: "{password()}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Phone or WhatsApp (optional)",
                        value: "{contact()}",
                        oninput: move |evt| contact.set(evt.value()),
                    }
                    div {
                        class: "join w-full",
                        button {
                            r#type: "button",
                            class: if role() == UserRole::Renter { "join-item btn btn-primary flex-1" } else { "join-item btn flex-1" },
                            onclick: move |_| role.set(UserRole::Renter),
                            "I'm looking for a kos"
                        }
                        button {
                            r#type: "button",
                            class: if role() == UserRole::Seller { "join-item btn btn-primary flex-1" } else { "join-item btn flex-1" },
                            onclick: move |_| role.set(UserRole::Seller),
                            "I own a kos"
                        }
                    }
                    if let Some(message) = error() {
                        div { class: "alert alert-error text-sm", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        "Register"
                    }
                    p {
                        class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Login" }
                    }
                }
            }
        }
    }
}
