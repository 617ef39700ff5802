//! Backend of the application.

pub mod routing;
pub mod services;
pub mod utils;
