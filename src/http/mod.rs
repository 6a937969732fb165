//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, login flag from cookies)
//!     → shell::App::navigate (theme gate → router → layout)
//!     → 307 redirect | 200/404 page | 503 spinner | 500 theme failure
//! ```

pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer, RESOLVE_PATH};
