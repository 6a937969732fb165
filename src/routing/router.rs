//! Route lookup and resolution.
//!
//! # Responsibilities
//! - Store compiled routes in declared order
//! - Resolve a path to exactly one view
//! - Follow the auth-gated redirect on the root path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declared order, first match wins
//! - Tables are validated up front: catch-all last, redirects land on views
//! - An unmatched path resolves to `NotFound`, never an error

use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthFlag;
use crate::observability::metrics;
use crate::routing::matcher::{self, normalize_path, Matcher};
use crate::routing::table::{dashboard_routes, RouteEntry, RoutePaths, RouteTarget};
use crate::views::ViewId;

/// Upper bound on redirects followed during one resolution.
const MAX_REDIRECTS: usize = 4;

/// Errors raised when a route table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route table is empty")]
    Empty,

    #[error("route table has no catch-all entry")]
    MissingCatchAll,

    #[error("catch-all entry at position {position} must be the last of {len} entries")]
    CatchAllNotLast { position: usize, len: usize },

    #[error("pattern '{0}' is declared more than once")]
    DuplicatePattern(String),

    #[error("pattern '{0}' must start with '/'")]
    InvalidPattern(String),

    #[error("pattern '{pattern}' can never match; use '{normalized}'")]
    UnnormalizedPattern { pattern: String, normalized: String },

    #[error("redirect on '{pattern}' targets '{target}', which redirects again")]
    RedirectLoop { pattern: String, target: String },

    #[error("redirect on '{pattern}' targets '{target}', which matches no view")]
    UnmatchedRedirect { pattern: String, target: String },
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The view to activate.
    pub view: ViewId,
    /// The path that finally matched (the redirect target after a redirect).
    pub location: String,
    /// The requested path, when a redirect happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

impl Resolution {
    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }
}

#[derive(Debug)]
struct CompiledRoute {
    entry: RouteEntry,
    matcher: Box<dyn Matcher>,
}

/// Resolves paths against an ordered route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Router {
    /// Validate and compile a route table.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        validate_entries(&entries)?;
        let router = Self::compile(entries);
        router.check_redirects()?;

        tracing::info!(routes = router.routes.len(), "Route table compiled");
        Ok(router)
    }

    /// Build the dashboard table for the given route paths.
    pub fn from_paths(paths: &RoutePaths) -> Result<Self, RouteError> {
        Self::new(dashboard_routes(paths))
    }

    fn compile(entries: Vec<RouteEntry>) -> Self {
        let routes = entries
            .into_iter()
            .map(|entry| CompiledRoute {
                matcher: matcher::compile(&entry.pattern, entry.exact),
                entry,
            })
            .collect();
        Self { routes }
    }

    fn check_redirects(&self) -> Result<(), RouteError> {
        for route in &self.routes {
            let RouteTarget::AuthRedirect { logged_in, logged_out } = &route.entry.target else {
                continue;
            };
            for target in [logged_in, logged_out] {
                let error_context = || (route.entry.pattern.clone(), target.clone());
                match self.lookup(&normalize_path(target)) {
                    Some(entry) if matches!(entry.target, RouteTarget::AuthRedirect { .. }) => {
                        let (pattern, target) = error_context();
                        return Err(RouteError::RedirectLoop { pattern, target });
                    }
                    Some(entry) if !entry.is_catch_all() => {}
                    _ => {
                        let (pattern, target) = error_context();
                        return Err(RouteError::UnmatchedRedirect { pattern, target });
                    }
                }
            }
        }
        Ok(())
    }

    /// First entry matching an already-normalized path.
    fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .map(|route| &route.entry)
    }

    /// Resolve `location` to the view to activate.
    pub fn resolve(&self, location: &str, auth: AuthFlag) -> Resolution {
        let requested = normalize_path(location);
        let mut path = requested.clone();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            match self.lookup(&path).map(|entry| &entry.target) {
                Some(RouteTarget::View(view)) => {
                    return finish(*view, path, redirected_from);
                }
                Some(RouteTarget::AuthRedirect { logged_in, logged_out }) => {
                    let target = if auth.is_logged_in() { logged_in } else { logged_out };
                    tracing::debug!(
                        from = %path,
                        to = %target,
                        logged_in = auth.is_logged_in(),
                        "Redirecting"
                    );
                    redirected_from.get_or_insert_with(|| requested.clone());
                    path = normalize_path(target);
                }
                None => {
                    tracing::debug!(path = %path, "No route matched");
                    return finish(ViewId::NotFound, path, redirected_from);
                }
            }
        }

        tracing::warn!(path = %requested, "Redirect limit reached");
        finish(ViewId::NotFound, path, redirected_from)
    }

    /// Resolve `location` and return only the view.
    pub fn resolve_view(&self, location: &str, auth: AuthFlag) -> ViewId {
        self.resolve(location, auth).view
    }

    /// The compiled table in declared order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().map(|route| &route.entry)
    }
}

fn finish(view: ViewId, location: String, redirected_from: Option<String>) -> Resolution {
    metrics::record_resolution(view, redirected_from.is_some());
    tracing::debug!(view = %view, location = %location, "Route resolved");
    Resolution {
        view,
        location,
        redirected_from,
    }
}

fn validate_entries(entries: &[RouteEntry]) -> Result<(), RouteError> {
    if entries.is_empty() {
        return Err(RouteError::Empty);
    }

    let position = entries
        .iter()
        .position(RouteEntry::is_catch_all)
        .ok_or(RouteError::MissingCatchAll)?;
    if position != entries.len() - 1 {
        return Err(RouteError::CatchAllNotLast {
            position,
            len: entries.len(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for entry in &entries[..position] {
        if !entry.pattern.starts_with('/') {
            return Err(RouteError::InvalidPattern(entry.pattern.clone()));
        }
        // Requests are normalized before matching, so patterns must be too.
        let normalized = normalize_path(&entry.pattern);
        if normalized != entry.pattern {
            return Err(RouteError::UnnormalizedPattern {
                pattern: entry.pattern.clone(),
                normalized,
            });
        }
        if !seen.insert((entry.pattern.as_str(), entry.exact)) {
            return Err(RouteError::DuplicatePattern(entry.pattern.clone()));
        }
    }
    Ok(())
}
