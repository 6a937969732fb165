//! Startup orchestration.
//!
//! # Responsibilities
//! - Compile the route table from the configured paths
//! - Open the session store backing the login flag
//! - Start the theme preload
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::sync::Arc;
use thiserror::Error;

use crate::auth::{FileStore, MemoryStore, SessionStore, StoreError};
use crate::config::DashboardConfig;
use crate::routing::{RouteError, Router};
use crate::shell::App;
use crate::theme::ThemeGate;
use crate::views::ViewRegistry;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Everything the HTTP layer needs.
#[derive(Debug, Clone)]
pub struct Components {
    pub app: App,
    pub store: Arc<dyn SessionStore>,
}

/// Build the app from configuration.
///
/// Must run inside a Tokio runtime when a theme stylesheet is configured.
pub fn build_components(config: &DashboardConfig) -> Result<Components, StartupError> {
    let router = Arc::new(Router::from_paths(&config.routes)?);

    let store: Arc<dyn SessionStore> = match &config.auth.store_path {
        Some(path) => Arc::new(FileStore::load(path)?),
        None => Arc::new(MemoryStore::new()),
    };

    let gate = ThemeGate::from_config(&config.theme);

    // Pages are served by the browser bundle; nothing to load server-side.
    let app = App::new(gate, router, ViewRegistry::preloaded());

    tracing::info!(
        flag_key = %config.auth.flag_key,
        theme = %config.theme.name,
        "Dashboard components initialized"
    );
    Ok(Components { app, store })
}
