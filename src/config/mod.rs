//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DashboardConfig (validated, immutable)
//!     → route paths feed the Router, theme settings feed the ThemeGate
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AuthConfig, DashboardConfig, ListenerConfig, ObservabilityConfig, ThemeConfig, TimeoutConfig,
};
pub use validation::ValidationError;
