//! Lazy view loading state.
//!
//! # States
//! - NotLoaded: bundle never requested
//! - Loading: load started, spinner shown
//! - Loaded: page can render
//!
//! # State Transitions
//! ```text
//! NotLoaded → Loading: first begin_load()
//! Loading → Loaded: mark_loaded()
//! NotLoaded → Loaded: mark_loaded() (preloaded views)
//! ```
//!
//! Loads are one-shot per view: there is no transition back.

use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

use crate::views::loader::ViewLoader;
use crate::views::ViewId;

/// Load state of a single view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

/// Tracks which views have finished loading.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    states: Arc<DashMap<ViewId, LoadState>>,
}

impl ViewRegistry {
    /// Create a registry where nothing is loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry where every view is already loaded.
    pub fn preloaded() -> Self {
        let registry = Self::new();
        for view in ViewId::ALL {
            registry.mark_loaded(view);
        }
        registry
    }

    /// Current load state of `view`.
    pub fn state(&self, view: ViewId) -> LoadState {
        self.states
            .get(&view)
            .map(|s| *s)
            .unwrap_or(LoadState::NotLoaded)
    }

    /// Returns true if the caller should start loading `view`.
    ///
    /// Only the first caller for a view gets `true`.
    pub fn begin_load(&self, view: ViewId) -> bool {
        let mut entry = self.states.entry(view).or_insert(LoadState::NotLoaded);
        if *entry == LoadState::NotLoaded {
            *entry = LoadState::Loading;
            tracing::debug!(view = %view, "View load started");
            true
        } else {
            false
        }
    }

    /// Mark `view` as loaded.
    pub fn mark_loaded(&self, view: ViewId) {
        let previous = self.states.insert(view, LoadState::Loaded);
        if previous != Some(LoadState::Loaded) {
            tracing::debug!(view = %view, "View loaded");
        }
    }

    /// Start loading `view` with `loader` unless a load already started.
    ///
    /// The load runs on the current Tokio runtime and marks the view loaded
    /// when it finishes. Outside a runtime there is nothing to drive it, so
    /// the view is marked loaded right away. Returns true if this call
    /// started the load.
    pub fn load_with(&self, view: ViewId, loader: Arc<dyn ViewLoader>) -> bool {
        if !self.begin_load(view) {
            return false;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let registry = self.clone();
                handle.spawn(async move {
                    loader.load(view).await;
                    registry.mark_loaded(view);
                });
            }
            Err(_) => {
                tracing::warn!(view = %view, "No runtime to load view, rendering directly");
                self.mark_loaded(view);
            }
        }
        true
    }

    pub fn is_loaded(&self, view: ViewId) -> bool {
        self.state(view) == LoadState::Loaded
    }
}
