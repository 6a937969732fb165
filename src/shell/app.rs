//! The dashboard application: theme gate, router, layout, view.
//!
//! # States
//! ```text
//! awaiting theme → ready          (one-directional)
//! ready: resolve → view loaded?   → Page
//!                → view loading   → spinner, loader runs in the background
//! ```
//!
//! Without a loader there is nothing to fetch, so views render on first use.

use serde::Serialize;
use std::sync::Arc;

use crate::auth::AuthFlag;
use crate::observability::metrics;
use crate::routing::Router;
use crate::shell::layout::{BaseLayout, Layout, Page};
use crate::theme::{ThemeGate, ThemeStatus};
use crate::views::{ViewLoader, ViewRegistry};

/// Spinner caption.
pub const LOADING_TIP: &str = "Loading...";

/// What the app shows for a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Screen {
    /// Theme or view still loading.
    Loading { tip: &'static str },
    /// Theme failed under the `fail` policy.
    Error { reason: String },
    Page(Page),
}

impl Screen {
    pub fn loading() -> Self {
        Screen::Loading { tip: LOADING_TIP }
    }
}

/// Composes the theme gate, router, layout shell and view registry.
#[derive(Debug, Clone)]
pub struct App {
    gate: ThemeGate,
    router: Arc<Router>,
    layout: Arc<dyn Layout>,
    views: ViewRegistry,
    loader: Option<Arc<dyn ViewLoader>>,
}

impl App {
    pub fn new(gate: ThemeGate, router: Arc<Router>, views: ViewRegistry) -> Self {
        Self {
            gate,
            router,
            layout: Arc::new(BaseLayout),
            views,
            loader: None,
        }
    }

    /// Fetch views through `loader` the first time they are shown.
    pub fn with_loader(mut self, loader: impl ViewLoader + 'static) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    /// Replace the default shell.
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Arc::new(layout);
        self
    }

    /// Decide what to show at `location`.
    pub fn navigate(&self, location: &str, auth: AuthFlag) -> Screen {
        let status = self.gate.status();
        metrics::record_theme_status(&status);

        let theme = match status {
            ThemeStatus::Loading => return Screen::loading(),
            ThemeStatus::Failed(reason) => return Screen::Error { reason },
            ThemeStatus::Ready(theme) => theme,
        };

        let resolution = self.router.resolve(location, auth);
        if !self.views.is_loaded(resolution.view) {
            match &self.loader {
                Some(loader) => {
                    if self.views.load_with(resolution.view, loader.clone()) {
                        tracing::debug!(view = %resolution.view, "View requested before load");
                    }
                    return Screen::loading();
                }
                None => self.views.mark_loaded(resolution.view),
            }
        }

        Screen::Page(self.layout.compose(resolution, &theme))
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn gate(&self) -> &ThemeGate {
        &self.gate
    }
}
