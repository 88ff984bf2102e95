use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::UserState,
    router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::user::LoginDto};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    // Logged-in users have nothing to do here
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
            let payload = LoginDto {
                username: username().trim().to_string(),
                password: password(),
            };
            match login(payload).await {
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
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            form {
                class: "card bg-base-200 w-full max-w-sm",
                onsubmit: on_submit,
                div {
                    class: "card-body gap-3",
                    h1 { class: "card-title text-2xl", "Login" }
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
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: "{password()}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        div { class: "alert alert-error text-sm", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        "Login"
                    }
                    p {
                        class: "text-sm text-center",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    }
}
