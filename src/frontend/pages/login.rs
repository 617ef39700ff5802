//! Login page component.

use crate::frontend::app::Route;
use crate::frontend::services::AuthState;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::{components::Link, use_navigator};

#[component]
pub fn LoginView() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut access_token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move || {
        let mut auth = auth.clone();
        let value = access_token();
        spawn(async move {
            match auth.login(value).await {
                Ok(()) => {
                    error.set(None);
                    nav.push(Route::ImageList {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        main {
            class: "login",
            h1 { "BWLP" }
            input {
                class: "token-input",
                r#type: "password",
                value: "{access_token()}",
                placeholder: "Access token",
                autofocus: true,
                oninput: move |e| {
                    access_token.set(e.value());
                    error.set(None);
                },
                onkeydown: {
                    let submit = submit.clone();
                    move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    }
                },
            }
            button {
                class: "login-button",
                onclick: {
                    let submit = submit.clone();
                    move |_| submit()
                },
                "Sign in"
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            footer {
                Link { to: Route::UserAgreement {}, "User Agreement" }
                Link { to: Route::PrivacyPolicy {}, "Privacy Policy" }
            }
        }
    }
}
