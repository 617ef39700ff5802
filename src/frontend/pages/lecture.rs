//! Lecture pages.

use crate::frontend::app::Route;
use crate::frontend::components::SessionBar;
use dioxus::prelude::*;
use dioxus_router::components::Link;

/// Lecture list, optionally with one lecture selected.
#[component]
pub fn LectureListView(#[props(!optional)] id: Option<String>) -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "lecture-list",
            h1 { "Lectures" }
            Link { to: Route::LectureCreate {}, "New lecture" }
            if let Some(id) = id {
                section {
                    class: "lecture-detail",
                    h2 { "Lecture {id}" }
                    Link { to: Route::LectureEdit { id: id.clone() }, "Edit" }
                    Link { to: Route::LectureDuplicate { id: id.clone() }, "Duplicate" }
                }
            }
        }
    }
}

#[component]
pub fn LectureCreateView() -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "lecture-create",
            h1 { "Create Lecture" }
            Link { to: Route::LectureList {}, "Back to list" }
        }
    }
}

#[component]
pub fn LectureEditView(id: String) -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "lecture-edit",
            h1 { "Edit Lecture {id}" }
            Link { to: Route::LectureDetail { id: id.clone() }, "Cancel" }
        }
    }
}

#[component]
pub fn LectureDuplicateView(id: String) -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "lecture-duplicate",
            h1 { "Duplicate Lecture {id}" }
            Link { to: Route::LectureDetail { id: id.clone() }, "Cancel" }
        }
    }
}
