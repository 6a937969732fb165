//! Route identifiers and the dashboard route table.
//!
//! The table is an ordered list of entries; order matters because the
//! first matching entry wins. The catch-all must come last.

use serde::{Deserialize, Serialize};

use crate::routing::matcher::CATCH_ALL;
use crate::views::ViewId;

/// Path of the auth-gated landing route.
pub const ROOT: &str = "/";

/// Symbolic route identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteId {
    SignUp,
    Application,
    ServiceMetrics,
    ServiceMap,
    Traces,
    TraceGraph,
    Settings,
    Instrumentation,
    UsageExplorer,
}

impl RouteId {
    /// Static routes in table order.
    pub const ALL: [RouteId; 9] = [
        RouteId::SignUp,
        RouteId::Application,
        RouteId::ServiceMetrics,
        RouteId::ServiceMap,
        RouteId::Traces,
        RouteId::TraceGraph,
        RouteId::Settings,
        RouteId::Instrumentation,
        RouteId::UsageExplorer,
    ];

    /// The view a static route activates.
    pub fn view(&self) -> ViewId {
        match self {
            RouteId::SignUp => ViewId::Signup,
            RouteId::Application => ViewId::ServicesTable,
            RouteId::ServiceMetrics => ViewId::ServiceMetrics,
            RouteId::ServiceMap => ViewId::ServiceMap,
            RouteId::Traces => ViewId::TraceDetail,
            RouteId::TraceGraph => ViewId::TraceGraph,
            RouteId::Settings => ViewId::SettingsPage,
            RouteId::Instrumentation => ViewId::InstrumentationPage,
            RouteId::UsageExplorer => ViewId::UsageExplorer,
        }
    }
}

/// Literal paths for each route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutePaths {
    pub sign_up: String,
    pub application: String,
    pub service_metrics: String,
    pub service_map: String,
    pub traces: String,
    pub trace_graph: String,
    pub settings: String,
    pub instrumentation: String,
    pub usage_explorer: String,
}

impl RoutePaths {
    pub fn get(&self, route: RouteId) -> &str {
        match route {
            RouteId::SignUp => &self.sign_up,
            RouteId::Application => &self.application,
            RouteId::ServiceMetrics => &self.service_metrics,
            RouteId::ServiceMap => &self.service_map,
            RouteId::Traces => &self.traces,
            RouteId::TraceGraph => &self.trace_graph,
            RouteId::Settings => &self.settings,
            RouteId::Instrumentation => &self.instrumentation,
            RouteId::UsageExplorer => &self.usage_explorer,
        }
    }
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            sign_up: "/signup".to_string(),
            application: "/application".to_string(),
            service_metrics: "/service-metrics".to_string(),
            service_map: "/service-map".to_string(),
            traces: "/traces".to_string(),
            trace_graph: "/trace-graph".to_string(),
            settings: "/settings".to_string(),
            instrumentation: "/instrumentation".to_string(),
            usage_explorer: "/usage-explorer".to_string(),
        }
    }
}

/// What a route activates once matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view.
    View(ViewId),
    /// Redirect depending on the login flag.
    AuthRedirect { logged_in: String, logged_out: String },
}

/// A single entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: String,
    pub exact: bool,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub fn view(pattern: impl Into<String>, exact: bool, view: ViewId) -> Self {
        Self {
            pattern: pattern.into(),
            exact,
            target: RouteTarget::View(view),
        }
    }

    pub fn auth_redirect(
        pattern: impl Into<String>,
        logged_in: impl Into<String>,
        logged_out: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            exact: true,
            target: RouteTarget::AuthRedirect {
                logged_in: logged_in.into(),
                logged_out: logged_out.into(),
            },
        }
    }

    pub fn catch_all() -> Self {
        Self::view(CATCH_ALL, true, ViewId::NotFound)
    }

    pub fn is_catch_all(&self) -> bool {
        self.pattern == CATCH_ALL
    }
}

/// The dashboard route table: static routes, the root redirect, then the catch-all.
pub fn dashboard_routes(paths: &RoutePaths) -> Vec<RouteEntry> {
    let mut entries: Vec<RouteEntry> = RouteId::ALL
        .iter()
        .map(|route| RouteEntry::view(paths.get(*route), true, route.view()))
        .collect();

    entries.push(RouteEntry::auth_redirect(
        ROOT,
        paths.get(RouteId::Application),
        paths.get(RouteId::SignUp),
    ));
    entries.push(RouteEntry::catch_all());
    entries
}
