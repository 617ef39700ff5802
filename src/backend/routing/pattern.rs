//! URL pattern compilation and matching.
//!
//! Patterns use the familiar `:param` syntax. A parameter followed by
//! `(.*)` (optionally repeated with `*` or `+`) swallows the remainder of
//! the path and is what the catch-all route is built from.

use super::RoutingError;
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Named parameters captured from a matched path.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

impl Segment {
    /// Higher is more specific.
    const fn rank(&self) -> u8 {
        match self {
            Self::Static(_) => 3,
            Self::Param(_) => 2,
            Self::CatchAll(_) => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl PathPattern {
    pub fn compile(source: &str) -> Result<Self, RoutingError> {
        let invalid = |reason: &str| RoutingError::InvalidPattern {
            pattern: source.to_string(),
            reason: reason.to_string(),
        };

        if !source.starts_with('/') {
            return Err(invalid("pattern must start with `/`"));
        }

        let mut segments = Vec::new();
        for raw in source.trim_matches('/').split('/').filter(|s| !s.is_empty()) {
            let segment = match raw.strip_prefix(':') {
                Some(param) => {
                    let (name, rest) = param
                        .find('(')
                        .map_or((param, ""), |idx| param.split_at(idx));
                    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(invalid("parameter names must be alphanumeric"));
                    }
                    match rest {
                        "" => Segment::Param(name.to_string()),
                        "(.*)" | "(.*)*" | "(.*)+" => Segment::CatchAll(name.to_string()),
                        _ => return Err(invalid("only `(.*)` custom patterns are supported")),
                    }
                }
                None if raw.contains(':') => return Err(invalid("`:` is only allowed at segment start")),
                None => Segment::Static(raw.to_string()),
            };

            if let Some(Segment::CatchAll(_)) = segments.last() {
                return Err(invalid("catch-all must be the last segment"));
            }
            segments.push(segment);
        }

        let mut expr = String::from("^");
        for segment in &segments {
            match segment {
                Segment::Static(text) => {
                    expr.push('/');
                    expr.push_str(&regex::escape(text));
                }
                Segment::Param(_) => expr.push_str("/([^/]+)"),
                Segment::CatchAll(_) => expr.push_str("(?:/(.*))?"),
            }
        }
        if segments.is_empty() {
            expr.push('/');
        }
        expr.push('$');

        let regex = RegexBuilder::new(&expr)
            .case_insensitive(true)
            .build()
            .map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            segments,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Matches an already normalized path, returning the captured parameters.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let names = self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) | Segment::CatchAll(name) => Some(name),
            Segment::Static(_) => None,
        });

        let mut params = Params::new();
        for (idx, name) in names.enumerate() {
            let value = caps.get(idx + 1).map_or("", |m| m.as_str());
            params.insert(name.clone(), value.to_string());
        }
        Some(params)
    }

    /// Orders patterns so that the most specific one comes first.
    pub fn specificity(&self, other: &Self) -> Ordering {
        for (a, b) in self.segments.iter().zip(&other.segments) {
            match b.rank().cmp(&a.rank()) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        match (self.is_catch_all(), other.is_catch_all()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => other.segments.len().cmp(&self.segments.len()),
        }
    }
}

/// Reduces a URL to the path that patterns are matched against: query and
/// fragment dropped, a leading slash ensured and a trailing slash removed.
pub fn normalize_path(url: &str) -> String {
    let path = url.split(['#', '?']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
