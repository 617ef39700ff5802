//! Layout that runs every route change through the navigation guards.

use crate::backend::routing::NavigationOutcome;
use crate::frontend::app::Route;
use crate::frontend::services::{AppContext, AuthState};
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};
use std::str::FromStr;

/// The route to switch to when the committed navigation is not the one
/// being rendered: after a redirect, or when the table matched a path the
/// UI router parsed differently (e.g. `/Image`).
pub fn settle(current: &Route, outcome: &NavigationOutcome) -> Option<Route> {
    let canonical = outcome.route.canonical_path();
    if current.to_string() == canonical {
        return None;
    }

    match Route::from_str(&canonical) {
        Ok(target) if target != *current => Some(target),
        Ok(_) => None,
        Err(_) => {
            log::error!("Committed route {canonical} is not a UI route");
            None
        }
    }
}

#[component]
pub fn NavigationGate() -> Element {
    let route = use_route::<Route>();
    let nav = navigator();
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();

    let path = route.to_string();
    let outcome = match ctx.navigator(auth).navigate(&path, None) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Navigation to {path} failed: {e}");
            return rsx! { div {} };
        }
    };

    if let Some(target) = settle(&route, &outcome) {
        nav.replace(target);
        return rsx! { div {} };
    }

    rsx! {
        document::Title { "{outcome.title}" }
        Outlet::<Route> {}
    }
}
