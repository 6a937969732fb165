//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Translate navigations into redirects, pages, spinners and errors

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::auth::{AuthFlag, SessionStore};
use crate::config::DashboardConfig;
use crate::http::request::{auth_flag_from_cookies, request_id};
use crate::lifecycle::startup::Components;
use crate::observability::metrics;
use crate::shell::{App, Screen};
use crate::views::ViewId;

/// Path of the JSON resolution endpoint.
pub const RESOLVE_PATH: &str = "/_router/resolve";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub app: App,
    pub store: Arc<dyn SessionStore>,
    pub flag_key: Arc<str>,
}

impl AppState {
    pub fn new(components: Components, flag_key: &str) -> Self {
        Self {
            app: components.app,
            store: components.store,
            flag_key: Arc::from(flag_key),
        }
    }

    /// Cookie first, then the session store.
    fn auth_flag(&self, headers: &HeaderMap) -> AuthFlag {
        auth_flag_from_cookies(headers, &self.flag_key)
            .unwrap_or_else(|| AuthFlag::from_store(self.store.as_ref(), &self.flag_key))
    }
}

/// HTTP server for the dashboard router.
pub struct HttpServer {
    router: Router,
    config: DashboardConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DashboardConfig, components: Components) -> Self {
        let state = AppState::new(components, &config.auth.flag_key);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &DashboardConfig, state: AppState) -> Router {
        Router::new()
            .route(RESOLVE_PATH, get(resolve_handler))
            .route("/", get(navigate_handler))
            .route("/{*path}", get(navigate_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered Axum router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain connections.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                // A closed channel means the coordinator is gone; stop as well.
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown requested");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

/// Navigation handler: resolve the request path and answer with the screen.
async fn navigate_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let request_id = request_id(&headers);
    let location = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let auth = state.auth_flag(&headers);

    let screen = state.app.navigate(location, auth);
    let response = match screen {
        Screen::Page(page) if page.redirected_from.is_some() => {
            tracing::debug!(
                request_id = %request_id,
                from = %location,
                to = %page.location,
                "Redirecting navigation"
            );
            Redirect::temporary(&page.location).into_response()
        }
        Screen::Page(page) => {
            let status = if page.view == ViewId::NotFound {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            tracing::debug!(request_id = %request_id, view = %page.view, "Serving view");
            (status, Json(Screen::Page(page))).into_response()
        }
        loading @ Screen::Loading { .. } => {
            tracing::debug!(request_id = %request_id, path = %location, "Still loading");
            (StatusCode::SERVICE_UNAVAILABLE, Json(loading)).into_response()
        }
        Screen::Error { reason } => {
            tracing::error!(request_id = %request_id, reason = %reason, "Cannot serve navigation");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Screen::Error { reason })).into_response()
        }
    };

    metrics::record_request(response.status().as_u16());
    response
}

#[derive(Debug, Deserialize)]
struct ResolveParams {
    path: String,
    logged_in: Option<bool>,
}

/// Resolve a path without consulting the theme or view state.
async fn resolve_handler(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let auth = params
        .logged_in
        .map(AuthFlag::from)
        .unwrap_or_else(|| state.auth_flag(&headers));

    Json(state.app.router().resolve(&params.path, auth))
}
