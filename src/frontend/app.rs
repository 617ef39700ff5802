//! Application routing system.

use crate::backend::routing::TokenSource;
use crate::frontend::components::NavigationGate;
use crate::frontend::pages::image::{ImageCreateView, ImageEditView, ImageListView};
use crate::frontend::pages::lecture::{
    LectureCreateView, LectureDuplicateView, LectureEditView, LectureListView,
};
use crate::frontend::pages::legal::{PrivacyPolicyView, UserAgreementView};
use crate::frontend::pages::login::LoginView;
use crate::frontend::services::{AppContext, AuthState};

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

/// Root component: exposes the session to every view and mounts the router.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let token = use_signal(|| ctx.session.token());
    provide_context(AuthState {
        token,
        session: ctx.session.clone(),
    });

    rsx! { Router::<Route> {} }
}

/// The root path only ever redirects.
#[component]
pub fn Root() -> Element {
    rsx! {}
}

#[component]
pub fn Login() -> Element {
    rsx! { LoginView {} }
}

#[component]
pub fn ImageList() -> Element {
    rsx! { ImageListView { id: None } }
}

#[component]
pub fn ImageCreate() -> Element {
    rsx! { ImageCreateView {} }
}

/// Detail pages reuse the list view with a selected id.
#[component]
pub fn ImageDetail(id: String) -> Element {
    rsx! { ImageListView { id: Some(id) } }
}

#[component]
pub fn ImageEdit(id: String) -> Element {
    rsx! { ImageEditView { id } }
}

#[component]
pub fn LectureList() -> Element {
    rsx! { LectureListView { id: None } }
}

#[component]
pub fn LectureCreate() -> Element {
    rsx! { LectureCreateView {} }
}

#[component]
pub fn LectureDetail(id: String) -> Element {
    rsx! { LectureListView { id: Some(id) } }
}

#[component]
pub fn LectureEdit(id: String) -> Element {
    rsx! { LectureEditView { id } }
}

#[component]
pub fn LectureDuplicate(id: String) -> Element {
    rsx! { LectureDuplicateView { id } }
}

#[component]
pub fn UserAgreement() -> Element {
    rsx! { UserAgreementView {} }
}

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! { PrivacyPolicyView {} }
}

/// Unknown paths; the navigation gate redirects before this renders.
#[component]
pub fn CatchAll(segments: Vec<String>) -> Element {
    log::debug!("No route for /{}", segments.join("/"));
    rsx! {}
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavigationGate)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/image")]
        ImageList {},
        #[route("/image/create")]
        ImageCreate {},
        #[route("/image/:id")]
        ImageDetail { id: String },
        #[route("/image/:id/edit")]
        ImageEdit { id: String },
        #[route("/lecture")]
        LectureList {},
        #[route("/lecture/create")]
        LectureCreate {},
        #[route("/lecture/:id")]
        LectureDetail { id: String },
        #[route("/lecture/:id/edit")]
        LectureEdit { id: String },
        #[route("/lecture/:id/duplicate")]
        LectureDuplicate { id: String },
        #[route("/user-agreement")]
        UserAgreement {},
        #[route("/privacy-policy")]
        PrivacyPolicy {},
        /// Anything else.
        #[route("/:..segments")]
        CatchAll { segments: Vec<String> },
}
