//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate route paths (absolute, unique, not reserved)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DashboardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::DashboardConfig;
use crate::routing::matcher::{normalize_path, CATCH_ALL};
use crate::routing::{RouteId, ROOT};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route {route:?} path '{path}' must start with '/'")]
    RelativeRoutePath { route: RouteId, path: String },

    #[error("route {route:?} path '{path}' can never match; use '{normalized}'")]
    UnnormalizedRoutePath {
        route: RouteId,
        path: String,
        normalized: String,
    },

    #[error("route {route:?} may not use reserved path '{path}'")]
    ReservedRoutePath { route: RouteId, path: String },

    #[error("routes {first:?} and {second:?} share path '{path}'")]
    DuplicateRoutePath {
        first: RouteId,
        second: RouteId,
        path: String,
    },

    #[error("auth.flag_key must not be empty")]
    EmptyFlagKey,

    #[error("{field} '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &DashboardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen: HashMap<&str, RouteId> = HashMap::new();
    for route in RouteId::ALL {
        let path = config.routes.get(route);
        if path == ROOT || path == CATCH_ALL {
            errors.push(ValidationError::ReservedRoutePath {
                route,
                path: path.to_string(),
            });
        } else if !path.starts_with('/') {
            errors.push(ValidationError::RelativeRoutePath {
                route,
                path: path.to_string(),
            });
        } else if normalize_path(path) != path {
            errors.push(ValidationError::UnnormalizedRoutePath {
                route,
                path: path.to_string(),
                normalized: normalize_path(path),
            });
        }
        if let Some(first) = seen.insert(path, route) {
            errors.push(ValidationError::DuplicateRoutePath {
                first,
                second: route,
                path: path.to_string(),
            });
        }
    }

    if config.auth.flag_key.trim().is_empty() {
        errors.push(ValidationError::EmptyFlagKey);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroDuration("timeouts.request_secs"));
    }
    if config.theme.load_timeout_ms == 0 {
        errors.push(ValidationError::ZeroDuration("theme.load_timeout_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
