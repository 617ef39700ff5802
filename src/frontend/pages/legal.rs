use crate::frontend::components::SessionBar;
use dioxus::prelude::*;

#[component]
pub fn UserAgreementView() -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "legal",
            h1 { "User Agreement" }
        }
    }
}

#[component]
pub fn PrivacyPolicyView() -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "legal",
            h1 { "Privacy Policy" }
        }
    }
}
