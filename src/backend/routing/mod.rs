//! Route table, navigation guards and the navigation pipeline.
//!
//! Everything here is independent of the UI toolkit: the Dioxus shell feeds
//! URLs in and applies the resulting redirect or title.

pub mod guard;
pub mod navigator;
pub mod pattern;
pub mod table;

pub use guard::{
    EntryGuard, GlobalGuard, GuardDecision, NavigationIntent, TokenSource, Verdict, auth_guard,
    resolve_requires_auth, route_title,
};
pub use navigator::{NavigationOutcome, Navigator};
pub use table::{ResolvedRoute, RouteDescriptor, RouteMeta, RouteRecord, RouteTable, ViewKind};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    DuplicateRouteName(String),
    InvalidPattern { pattern: String, reason: String },
    UnknownRoute(String),
    RedirectLoop { from: String, hops: usize },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRouteName(name) => write!(f, "duplicate route name `{name}`"),
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid route pattern `{pattern}`: {reason}")
            }
            Self::UnknownRoute(path) => write!(f, "no route matches `{path}`"),
            Self::RedirectLoop { from, hops } => {
                write!(f, "navigation to `{from}` redirected {hops} times")
            }
        }
    }
}

impl std::error::Error for RoutingError {}
