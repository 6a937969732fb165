//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dashboard_route_resolutions_total` (counter): resolutions by view and redirect
//! - `dashboard_http_requests_total` (counter): HTTP navigations by status
//! - `dashboard_theme_status` (gauge): 0=loading, 1=ready, 2=failed

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

use crate::theme::ThemeStatus;
use crate::views::ViewId;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_resolution(view: ViewId, redirected: bool) {
    counter!(
        "dashboard_route_resolutions_total",
        "view" => view.as_str(),
        "redirected" => if redirected { "true" } else { "false" }
    )
    .increment(1);
}

pub fn record_request(status: u16) {
    counter!("dashboard_http_requests_total", "status" => status.to_string()).increment(1);
}

pub fn record_theme_status(status: &ThemeStatus) {
    let value = match status {
        ThemeStatus::Loading => 0.0,
        ThemeStatus::Ready(_) => 1.0,
        ThemeStatus::Failed(_) => 2.0,
    };
    gauge!("dashboard_theme_status").set(value);
}
