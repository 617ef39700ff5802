//! Shared UI components.

pub mod navigation_gate;
pub mod session_bar;

pub use navigation_gate::NavigationGate;
pub use session_bar::SessionBar;
