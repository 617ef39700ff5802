//! Runs a navigation through route redirects, entry guards and the global
//! guard, following substituted destinations until one is committed.

use super::guard::{GlobalGuard, GuardDecision, NavigationIntent, TokenSource, Verdict, auth_guard};
use super::table::{ResolvedRoute, RouteTable};
use super::RoutingError;
use crate::backend::utils::config::RoutingConfig;
use std::sync::Arc;

/// A committed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub route: ResolvedRoute,
    /// Document title to display.
    pub title: String,
    /// Every URL that was abandoned on the way, in order.
    pub redirected_from: Vec<String>,
}

impl NavigationOutcome {
    pub fn target(&self) -> &str {
        &self.route.path
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirected_from.is_empty()
    }
}

pub struct Navigator<T> {
    table: Arc<RouteTable>,
    routing: RoutingConfig,
    tokens: T,
    guard: GlobalGuard,
}

impl<T> Navigator<T>
where
    T: TokenSource + Clone + 'static,
{
    pub fn new(table: Arc<RouteTable>, routing: RoutingConfig, tokens: T) -> Self {
        let guard = auth_guard(
            tokens.clone(),
            routing.login_path.clone(),
            routing.title_prefix.clone(),
        );
        Self {
            table,
            routing,
            tokens,
            guard,
        }
    }

    /// Navigates to `url`. Fails only when the table cannot resolve a URL or
    /// the redirects never settle.
    pub fn navigate(
        &self,
        url: &str,
        from: Option<&ResolvedRoute>,
    ) -> Result<NavigationOutcome, RoutingError> {
        let mut current = url.to_string();
        let mut redirected_from = Vec::new();

        loop {
            let to = self.table.resolve(&current)?;
            let leaf = to.leaf();

            let substitute = if let Some(target) = leaf.redirect {
                Some(target.to_string())
            } else if let Some(GuardDecision::Redirect(target)) = leaf
                .entry_guard
                .map(|guard| guard.evaluate(&self.tokens, &self.routing))
            {
                Some(target)
            } else {
                let intent = NavigationIntent {
                    to,
                    from: from.cloned(),
                };
                match (self.guard)(&intent) {
                    Verdict::Permit { title } => {
                        log::debug!("Navigation to {} committed", intent.to.path);
                        return Ok(NavigationOutcome {
                            route: intent.to,
                            title,
                            redirected_from,
                        });
                    }
                    Verdict::Redirect(target) => Some(target),
                }
            };

            if let Some(next) = substitute {
                log::debug!("Redirecting {current} -> {next}");
                redirected_from.push(std::mem::replace(&mut current, next));
                if redirected_from.len() > self.routing.max_redirects {
                    log::warn!("Navigation to {url} does not settle, giving up");
                    return Err(RoutingError::RedirectLoop {
                        from: url.to_string(),
                        hops: redirected_from.len(),
                    });
                }
            }
        }
    }
}
