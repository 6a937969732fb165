//! Application shell.
//!
//! # Data Flow
//! ```text
//! Navigation (path, login flag)
//!     → app.rs: theme gate open?
//!         no  → Screen::Loading
//!         yes → Router::resolve
//!     → views: selected view loaded?
//!         no  → Screen::Loading
//!         yes → layout.rs wraps the view → Screen::Page
//! ```

pub mod app;
pub mod layout;

pub use app::{App, Screen, LOADING_TIP};
pub use layout::{BaseLayout, Layout, Page};
