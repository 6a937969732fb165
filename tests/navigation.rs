//! Navigation through the HTTP layer, driven in-process.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use dashboard_router::auth::{MemoryStore, SessionStore};
use dashboard_router::config::DashboardConfig;
use dashboard_router::lifecycle::Components;
use dashboard_router::routing::{RoutePaths, Router};
use dashboard_router::theme::{FailurePolicy, Theme, ThemeGate};
use dashboard_router::views::ViewRegistry;
use dashboard_router::App;

mod common;

async fn get(router: axum::Router, uri: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn components(gate: ThemeGate, store: MemoryStore) -> Components {
    let router = Arc::new(Router::from_paths(&RoutePaths::default()).unwrap());
    Components {
        app: App::new(gate, router, ViewRegistry::preloaded()),
        store: Arc::new(store) as Arc<dyn SessionStore>,
    }
}

#[tokio::test]
async fn test_static_route_serves_view() {
    let router = common::server(DashboardConfig::default()).router();

    let response = get(router, "/service-map", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = json(response).await;
    assert_eq!(body["status"], "page");
    assert_eq!(body["view"], "ServiceMap");
    assert_eq!(body["location"], "/service-map");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let router = common::server(DashboardConfig::default()).router();

    let response = get(router, "/unknown-xyz", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(response).await["view"], "NotFound");
}

#[tokio::test]
async fn test_root_redirects_logged_in_cookie_to_application() {
    let router = common::server(DashboardConfig::default()).router();

    let response = get(router, "/", Some("isLoggedIn=yes")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/application");
}

#[tokio::test]
async fn test_root_redirects_anonymous_to_signup() {
    let router = common::server(DashboardConfig::default()).router();

    let response = get(router.clone(), "/", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/signup");

    let response = get(router, "/", Some("isLoggedIn=no")).await;
    assert_eq!(response.headers()[header::LOCATION], "/signup");
}

#[tokio::test]
async fn test_store_supplies_flag_without_cookie() {
    let store = MemoryStore::new();
    store.set("isLoggedIn", "yes");
    let server = common::server_with(
        DashboardConfig::default(),
        components(ThemeGate::ready(Theme::fallback()), store),
    );

    let response = get(server.router(), "/", None).await;
    assert_eq!(response.headers()[header::LOCATION], "/application");

    // The cookie wins over the store.
    let response = get(server.router(), "/", Some("isLoggedIn=no")).await;
    assert_eq!(response.headers()[header::LOCATION], "/signup");
}

#[tokio::test]
async fn test_spinner_while_theme_loads() {
    let (gate, completer) = ThemeGate::channel(FailurePolicy::Fallback);
    let server = common::server_with(
        DashboardConfig::default(),
        components(gate, MemoryStore::new()),
    );

    let response = get(server.router(), "/traces", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        json(response).await,
        serde_json::json!({"status": "loading", "tip": "Loading..."})
    );

    completer.complete(Ok(Theme::named("dark")));
    let response = get(server.router(), "/traces", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["view"], "TraceDetail");
    assert_eq!(body["theme"], "dark");
}

#[tokio::test]
async fn test_failed_theme_with_fail_policy() {
    let (gate, completer) = ThemeGate::channel(FailurePolicy::Fail);
    completer.complete(Err(dashboard_router::theme::ThemeError::Timeout(
        std::time::Duration::from_millis(10),
    )));
    let server = common::server_with(
        DashboardConfig::default(),
        components(gate, MemoryStore::new()),
    );

    let response = get(server.router(), "/settings", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json(response).await["status"], "error");
}

#[tokio::test]
async fn test_resolve_endpoint() {
    let router = common::server(DashboardConfig::default()).router();

    let response = get(router.clone(), "/_router/resolve?path=/&logged_in=true", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["view"], "ServicesTable");
    assert_eq!(body["location"], "/application");
    assert_eq!(body["redirected_from"], "/");

    let response = get(router, "/_router/resolve?path=/usage-explorer", None).await;
    let body = json(response).await;
    assert_eq!(body["view"], "UsageExplorer");
    assert!(body.get("redirected_from").is_none());
}

#[tokio::test]
async fn test_configured_route_paths() {
    let mut config = DashboardConfig::default();
    config.routes.application = "/services".to_string();
    let router = common::server(config).router();

    let response = get(router.clone(), "/", Some("isLoggedIn=yes")).await;
    assert_eq!(response.headers()[header::LOCATION], "/services");

    let response = get(router, "/application", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
