//! Views bound to routes.

pub mod image;
pub mod lecture;
pub mod legal;
pub mod login;
