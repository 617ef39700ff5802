//! Backend services.

pub mod session;

pub use session::{SessionFile, SessionStore};
