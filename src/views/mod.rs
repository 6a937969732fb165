//! Dashboard views.
//!
//! # Data Flow
//! ```text
//! Router resolves a path
//!     → ViewId (which page to show)
//!     → registry.rs (is the page bundle loaded yet?)
//!     → Loaded: shell renders the page
//!     → NotLoaded: loader.rs fetches the bundle in the background
//!     → NotLoaded / Loading: shell renders the spinner
//! ```
//!
//! # Design Decisions
//! - Views are plain identifiers; the pages themselves live elsewhere
//! - Each view loads at most once per process

pub mod loader;
pub mod registry;

use serde::{Deserialize, Serialize};

pub use loader::{LoadFuture, ViewLoader};
pub use registry::{LoadState, ViewRegistry};

/// A renderable page the router can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Signup,
    ServicesTable,
    ServiceMetrics,
    ServiceMap,
    TraceDetail,
    TraceGraph,
    SettingsPage,
    InstrumentationPage,
    UsageExplorer,
    NotFound,
}

impl ViewId {
    /// Every view, in route table order with `NotFound` last.
    pub const ALL: [ViewId; 10] = [
        ViewId::Signup,
        ViewId::ServicesTable,
        ViewId::ServiceMetrics,
        ViewId::ServiceMap,
        ViewId::TraceDetail,
        ViewId::TraceGraph,
        ViewId::SettingsPage,
        ViewId::InstrumentationPage,
        ViewId::UsageExplorer,
        ViewId::NotFound,
    ];

    /// Stable name used in logs, metrics labels and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Signup => "Signup",
            ViewId::ServicesTable => "ServicesTable",
            ViewId::ServiceMetrics => "ServiceMetrics",
            ViewId::ServiceMap => "ServiceMap",
            ViewId::TraceDetail => "TraceDetail",
            ViewId::TraceGraph => "TraceGraph",
            ViewId::SettingsPage => "SettingsPage",
            ViewId::InstrumentationPage => "InstrumentationPage",
            ViewId::UsageExplorer => "UsageExplorer",
            ViewId::NotFound => "NotFound",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_name_matches_as_str() {
        for view in ViewId::ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
    }
}
