//! Image pages.

use crate::frontend::app::Route;
use crate::frontend::components::SessionBar;
use dioxus::prelude::*;
use dioxus_router::components::Link;

/// Image list. With an `id` the same view shows that image as selected.
#[component]
pub fn ImageListView(#[props(!optional)] id: Option<String>) -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "image-list",
            h1 { "Images" }
            Link { to: Route::ImageCreate {}, "New image" }
            if let Some(id) = id {
                section {
                    class: "image-detail",
                    h2 { "Image {id}" }
                    Link { to: Route::ImageEdit { id: id.clone() }, "Edit" }
                }
            }
        }
    }
}

#[component]
pub fn ImageCreateView() -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "image-create",
            h1 { "Create Image" }
            Link { to: Route::ImageList {}, "Back to list" }
        }
    }
}

#[component]
pub fn ImageEditView(id: String) -> Element {
    rsx! {
        SessionBar {}
        main {
            class: "image-edit",
            h1 { "Edit Image {id}" }
            Link { to: Route::ImageDetail { id: id.clone() }, "Cancel" }
        }
    }
}
