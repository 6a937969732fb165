//! Theme loading subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → gate.rs spawns the single theme load (stylesheet from disk)
//!     → ThemeStatus::Loading  (app shows the spinner)
//!     → ThemeStatus::Ready    (app resolves routes)
//!       or ThemeStatus::Failed (only with the `fail` policy)
//! ```
//!
//! # Design Decisions
//! - The load is single-shot; a settled gate never returns to Loading
//! - A failed load falls back to the built-in theme unless configured to fail

pub mod gate;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub use gate::{ThemeCompleter, ThemeGate, ThemeStatus};

/// Name of the built-in theme used when nothing else is available.
pub const FALLBACK_THEME: &str = "light";

/// A loaded theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: String,
    /// Raw stylesheet contents; empty for the built-in theme.
    #[serde(skip)]
    pub stylesheet: String,
}

impl Theme {
    /// A theme with no stylesheet of its own.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stylesheet: String::new(),
        }
    }

    pub fn fallback() -> Self {
        Self::named(FALLBACK_THEME)
    }
}

/// What to do when the theme cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log and continue with the built-in theme.
    #[default]
    Fallback,
    /// Stay failed; the app reports an error instead of pages.
    Fail,
}

/// Errors raised while loading a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read stylesheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme load timed out after {0:?}")]
    Timeout(Duration),
}

/// Read a stylesheet from disk.
pub async fn load_stylesheet(path: &Path, name: &str) -> Result<Theme, ThemeError> {
    let stylesheet = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = stylesheet.len(), "Stylesheet read");
    Ok(Theme {
        name: name.to_string(),
        stylesheet,
    })
}
