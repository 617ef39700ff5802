//! Authentication context and state management.

use crate::backend::routing::{Navigator, RouteTable, TokenSource};
use crate::backend::services::{SessionFile, SessionStore};
use crate::backend::utils::config::RoutingConfig;
use crate::simple_error;
use crate::utils::Result;
use dioxus::prelude::*;
use std::sync::Arc;

/// Handed to the launcher once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub table: Arc<RouteTable>,
    pub routing: RoutingConfig,
    pub session: SessionStore,
}

impl AppContext {
    /// A navigator reading the token from `tokens`.
    pub fn navigator<T>(&self, tokens: T) -> Navigator<T>
    where
        T: TokenSource + Clone + 'static,
    {
        Navigator::new(self.table.clone(), self.routing.clone(), tokens)
    }
}

/// Reactive view of the session for components.
#[derive(Clone)]
pub struct AuthState {
    pub token: Signal<Option<String>>,
    pub session: SessionStore,
}

impl AuthState {
    /// Stores a token issued by the authentication service.
    pub async fn login(&mut self, token: String) -> Result<()> {
        let token = normalize_token(&token)?;

        if let Err(e) = SessionFile::new(token.clone()).save().await {
            return Err(simple_error!("Failed to save session: {}", e));
        }

        self.session.set_token(token.clone());
        self.token.set(Some(token));

        Ok(())
    }

    /// Logs out the current user.
    pub async fn logout(&mut self) {
        self.session.clear();
        self.token.set(None);
        if let Err(e) = SessionFile::delete().await {
            log::warn!("Failed to remove saved session: {e}");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.has_token()
    }
}

/// Trims a pasted token, rejecting blank input.
pub fn normalize_token(token: &str) -> Result<String> {
    let token = token.trim();
    if token.is_empty() {
        return Err("Access token must not be empty".into());
    }
    Ok(token.to_string())
}

impl TokenSource for AuthState {
    fn token(&self) -> Option<String> {
        (*self.token.read()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pasted_tokens_are_trimmed() {
        assert_eq!(normalize_token("  abc123\n").unwrap(), "abc123");
    }

    #[test]
    fn blank_tokens_are_rejected() {
        let err = normalize_token(" \t ").unwrap_err();
        assert_eq!(err.to_string(), "Access token must not be empty");
    }
}
