//! Frontend services shared through the Dioxus context.

pub mod context;

pub use context::{AppContext, AuthState};
