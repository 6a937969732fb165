//! Path matching logic.
//!
//! # Responsibilities
//! - Match a path exactly against a pattern
//! - Match a path prefix on segment boundaries
//! - Match anything (catch-all `*`)
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Matchers see normalized paths only (see `normalize_path`)
//! - No regex to guarantee O(n) matching

use url::Url;

/// The catch-all pattern.
pub const CATCH_ALL: &str = "*";

/// Trait for matching paths against a route pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a single path exactly.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    expected: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            expected: path.into(),
        }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.expected
    }
}

/// Matches the path prefix.
///
/// `/traces` matches `/traces` and `/traces/abc`, never `/tracesx`.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(&self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || self.prefix.ends_with('/'),
            None => false,
        }
    }
}

/// Matches every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchAllMatcher;

impl Matcher for CatchAllMatcher {
    fn matches(&self, _path: &str) -> bool {
        true
    }
}

/// Build the matcher for a route pattern.
pub fn compile(pattern: &str, exact: bool) -> Box<dyn Matcher> {
    if pattern == CATCH_ALL {
        Box::new(CatchAllMatcher)
    } else if exact {
        Box::new(ExactMatcher::new(pattern))
    } else {
        Box::new(PathPrefixMatcher::new(pattern))
    }
}

/// Reduce a location to the path the route table matches against.
///
/// Accepts either a bare path or an absolute URL. Query string and
/// fragment are dropped, an empty path becomes `/`, and one trailing
/// slash is removed from non-root paths.
pub fn normalize_path(location: &str) -> String {
    let path = match Url::parse(location) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let path = if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    };

    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => path,
    }
}
