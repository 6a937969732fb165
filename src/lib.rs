//! Dashboard view router.
//!
//! Resolves the dashboard URL path to the view to show, gating the
//! landing page on the persisted login flag and holding every page behind
//! a spinner until the theme preload settles.

pub mod auth;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod shell;
pub mod theme;
pub mod views;

pub use auth::AuthFlag;
pub use config::DashboardConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Resolution, Router};
pub use shell::{App, Screen};
pub use views::ViewId;
