//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (path, login flag)
//!     → matcher.rs (normalize path, evaluate patterns)
//!     → router.rs (first match wins, follow root redirect)
//!     → Return: Resolution { view, location }
//!
//! Route Compilation (at startup):
//!     RoutePaths (config)
//!     → table.rs (ordered entries: static routes, root redirect, catch-all)
//!     → Validate & compile matchers
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (exact and prefix matching only)
//! - Deterministic: same input always resolves to the same view
//! - First match wins (declared order), catch-all last

pub mod matcher;
pub mod router;
pub mod table;

pub use router::{Resolution, RouteError, Router};
pub use table::{dashboard_routes, RouteEntry, RouteId, RoutePaths, RouteTarget, ROOT};
