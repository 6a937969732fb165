//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! dashboard router. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::auth::IS_LOGGED_IN;
use crate::routing::RoutePaths;
use crate::theme::{FailurePolicy, FALLBACK_THEME};

/// Root configuration for the dashboard router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Literal paths of the dashboard routes.
    pub routes: RoutePaths,

    /// Where the login flag is read from.
    pub auth: AuthConfig,

    /// Theme preload settings.
    pub theme: ThemeConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3301").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3301".to_string(),
        }
    }
}

/// Login flag configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Key (and cookie name) the flag is stored under.
    pub flag_key: String,

    /// Optional JSON file backing the session store.
    pub store_path: Option<PathBuf>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            flag_key: IS_LOGGED_IN.to_string(),
            store_path: None,
        }
    }
}

/// Theme preload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme name reported to clients.
    pub name: String,

    /// Stylesheet to preload. Without one the theme is ready at startup.
    pub stylesheet: Option<PathBuf>,

    /// Upper bound on the preload in milliseconds.
    pub load_timeout_ms: u64,

    /// Behavior when the preload fails or times out.
    pub on_failure: FailurePolicy,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: FALLBACK_THEME.to_string(),
            stylesheet: None,
            load_timeout_ms: 5_000,
            on_failure: FailurePolicy::Fallback,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
