//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use dashboard_router::config::DashboardConfig;
use dashboard_router::lifecycle::{build_components, Components, Shutdown};
use dashboard_router::HttpServer;

/// Build the HTTP server for `config` without binding it.
pub fn server(config: DashboardConfig) -> HttpServer {
    let components = build_components(&config).unwrap();
    HttpServer::new(config, components)
}

/// Build the HTTP server around hand-made components.
#[allow(dead_code)]
pub fn server_with(config: DashboardConfig, components: Components) -> HttpServer {
    HttpServer::new(config, components)
}

/// Bind `server` to an ephemeral port and run it in the background.
#[allow(dead_code)]
pub async fn spawn(server: HttpServer, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    addr
}

/// A client that never follows redirects.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
