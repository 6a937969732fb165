//! Layout shell around the active view.

use serde::Serialize;

use crate::routing::Resolution;
use crate::theme::Theme;
use crate::views::ViewId;

/// A resolved view wrapped in the persistent chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub layout: &'static str,
    pub theme: String,
    pub view: ViewId,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

/// Renders persistent chrome around whichever view the router selects.
pub trait Layout: Send + Sync + std::fmt::Debug {
    fn compose(&self, resolution: Resolution, theme: &Theme) -> Page;
}

/// The default dashboard shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseLayout;

impl Layout for BaseLayout {
    fn compose(&self, resolution: Resolution, theme: &Theme) -> Page {
        Page {
            layout: "base",
            theme: theme.name.clone(),
            view: resolution.view,
            location: resolution.location,
            redirected_from: resolution.redirected_from,
        }
    }
}
