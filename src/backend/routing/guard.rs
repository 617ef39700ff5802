//! Navigation guards.
//!
//! Guards only ever read the authentication token. Decisions depend on the
//! token at the instant of evaluation and the target route, nothing else.

use super::table::ResolvedRoute;
use crate::backend::utils::config::RoutingConfig;
use serde::Serialize;
use std::rc::Rc;
use std::sync::Arc;

/// Read access to the current authentication token.
pub trait TokenSource {
    fn token(&self) -> Option<String>;

    /// An empty token counts as logged out.
    fn has_token(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

impl TokenSource for Option<String> {
    fn token(&self) -> Option<String> {
        self.clone()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Rc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

/// One navigation attempt, alive only while guards run.
#[derive(Debug, Clone)]
pub struct NavigationIntent {
    pub to: ResolvedRoute,
    pub from: Option<ResolvedRoute>,
}

/// Outcome of a route-local entry guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// Outcome of the global guard. Exactly one per navigation hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Navigation continues and the document title becomes `title`.
    Permit { title: String },
    Redirect(String),
}

/// Guards attached to individual routes, run before the global guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryGuard {
    /// Bare `/`: send the user to the list or to the login screen.
    RootLanding,
    /// Keep signed-in sessions off the login screen.
    LoginScreen,
}

impl EntryGuard {
    pub fn evaluate(self, tokens: &dyn TokenSource, routing: &RoutingConfig) -> GuardDecision {
        let signed_in = tokens.has_token();
        match self {
            Self::RootLanding if signed_in => GuardDecision::Redirect(routing.home_path.clone()),
            Self::RootLanding => GuardDecision::Redirect(routing.login_path.clone()),
            Self::LoginScreen if signed_in => GuardDecision::Redirect(routing.home_path.clone()),
            Self::LoginScreen => GuardDecision::Proceed,
        }
    }
}

/// Whether any route in the matched chain demands a signed-in session.
pub fn resolve_requires_auth(route: &ResolvedRoute) -> bool {
    route.matched.iter().any(|record| record.meta.requires_auth)
}

/// The innermost declared title of the matched chain.
pub fn route_title(route: &ResolvedRoute) -> Option<&'static str> {
    route.matched.iter().rev().find_map(|record| record.meta.title)
}

pub type GlobalGuard = Box<dyn Fn(&NavigationIntent) -> Verdict>;

/// Builds the global guard around an injected token source.
pub fn auth_guard<T>(tokens: T, login_path: String, title_prefix: String) -> GlobalGuard
where
    T: TokenSource + 'static,
{
    Box::new(move |intent| {
        if resolve_requires_auth(&intent.to) && !tokens.has_token() {
            log::debug!("{} requires a session, redirecting to {login_path}", intent.to.path);
            return Verdict::Redirect(login_path.clone());
        }

        let title = route_title(&intent.to).unwrap_or_default();
        Verdict::Permit {
            title: format!("{title_prefix}{title}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::routing::RouteTable;

    fn token(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn intent(url: &str) -> NavigationIntent {
        NavigationIntent {
            to: RouteTable::bwlp().unwrap().resolve(url).unwrap(),
            from: None,
        }
    }

    fn guard(tokens: Option<String>) -> GlobalGuard {
        let routing = RoutingConfig::default();
        auth_guard(tokens, routing.login_path, routing.title_prefix)
    }

    #[test]
    fn empty_tokens_count_as_signed_out() {
        assert!(!None::<String>.has_token());
        assert!(!token("").has_token());
        assert!(token("abc123").has_token());
    }

    #[test]
    fn root_lands_according_to_session() {
        let routing = RoutingConfig::default();
        assert_eq!(
            EntryGuard::RootLanding.evaluate(&token("abc123"), &routing),
            GuardDecision::Redirect("/image".to_string())
        );
        assert_eq!(
            EntryGuard::RootLanding.evaluate(&None::<String>, &routing),
            GuardDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn login_screen_is_only_for_signed_out_users() {
        let routing = RoutingConfig::default();
        assert_eq!(
            EntryGuard::LoginScreen.evaluate(&token("abc123"), &routing),
            GuardDecision::Redirect("/image".to_string())
        );
        assert_eq!(
            EntryGuard::LoginScreen.evaluate(&None::<String>, &routing),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn protected_routes_redirect_without_a_token() {
        let guard = guard(None);
        for url in ["/image", "/image/create", "/lecture/42/edit", "/privacy-policy"] {
            assert_eq!(guard(&intent(url)), Verdict::Redirect("/login".to_string()), "{url}");
        }
    }

    #[test]
    fn permitted_navigation_sets_the_branded_title() {
        let guard = guard(token("abc123"));
        assert_eq!(
            guard(&intent("/privacy-policy")),
            Verdict::Permit {
                title: "BWLP • Privacy Policy".to_string()
            }
        );
        assert_eq!(
            guard(&intent("/lecture/9/duplicate")),
            Verdict::Permit {
                title: "BWLP • Duplicate Lecture".to_string()
            }
        );
    }

    #[test]
    fn public_routes_are_permitted_without_a_token() {
        assert_eq!(
            guard(None)(&intent("/login")),
            Verdict::Permit {
                title: "BWLP • Login".to_string()
            }
        );
    }

    #[test]
    fn missing_titles_leave_the_bare_prefix() {
        assert_eq!(
            guard(None)(&intent("/")),
            Verdict::Permit {
                title: "BWLP • ".to_string()
            }
        );
    }

    #[test]
    fn requires_auth_is_inherited_from_parents() {
        let mut route = intent("/image/3").to;
        route.matched[1].meta.requires_auth = false;
        assert!(resolve_requires_auth(&route));

        route.matched[0].meta.requires_auth = false;
        assert!(!resolve_requires_auth(&route));
    }

    #[test]
    fn child_titles_override_parent_titles() {
        let mut route = intent("/image/3/edit").to;
        assert_eq!(route_title(&route), Some("Edit Image"));

        route.matched[1].meta.title = None;
        assert_eq!(route_title(&route), Some("Image List"));
    }

    #[test]
    fn guard_reads_the_token_at_evaluation_time() {
        use std::sync::RwLock;

        struct Shared(Arc<RwLock<Option<String>>>);
        impl TokenSource for Shared {
            fn token(&self) -> Option<String> {
                self.0.read().ok().and_then(|t| t.clone())
            }
        }

        let slot = Arc::new(RwLock::new(None));
        let routing = RoutingConfig::default();
        let guard = auth_guard(Shared(slot.clone()), routing.login_path, routing.title_prefix);

        assert!(matches!(guard(&intent("/image")), Verdict::Redirect(_)));
        *slot.write().unwrap() = Some("abc123".to_string());
        assert!(matches!(guard(&intent("/image")), Verdict::Permit { .. }));
    }
}
