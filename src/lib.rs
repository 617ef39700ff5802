//! BWLP front-end: route table, navigation guards and the Dioxus shell.

pub mod backend;
pub mod frontend;
pub mod utils;
