use crate::frontend::app::Route;
use crate::frontend::services::AuthState;
use dioxus::prelude::*;
use dioxus_router::{components::Link, use_navigator};

/// Top bar with the main sections and a logout button.
#[component]
pub fn SessionBar() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let signed_in = auth.is_authenticated();

    rsx! {
        header {
            class: "session-bar",
            nav {
                Link { to: Route::ImageList {}, "Images" }
                Link { to: Route::LectureList {}, "Lectures" }
            }
            if signed_in {
                button {
                    class: "logout-button",
                    onclick: move |_| {
                        let mut auth = auth.clone();
                        spawn(async move {
                            auth.logout().await;
                            nav.replace(Route::Login {});
                        });
                    },
                    "Log out"
                }
            }
        }
    }
}
