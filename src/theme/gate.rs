//! Theme gate state machine.
//!
//! # States
//! - Loading: render the spinner only
//! - Ready: delegate to the router
//! - Failed: report a hard error (`fail` policy only)
//!
//! # State Transitions
//! ```text
//! Loading → Ready:  load finished, or failed under the `fallback` policy
//! Loading → Failed: load failed under the `fail` policy
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::config::ThemeConfig;
use crate::theme::{load_stylesheet, FailurePolicy, Theme, ThemeError};

/// Observable state of the theme load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeStatus {
    Loading,
    Ready(Arc<Theme>),
    Failed(String),
}

impl ThemeStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ThemeStatus::Loading)
    }
}

/// Read side of the theme load, cheap to clone.
#[derive(Debug, Clone)]
pub struct ThemeGate {
    rx: watch::Receiver<ThemeStatus>,
}

/// Write side of the theme load. Consumed on completion.
#[derive(Debug)]
pub struct ThemeCompleter {
    tx: watch::Sender<ThemeStatus>,
    policy: FailurePolicy,
}

impl ThemeCompleter {
    /// Settle the gate with the outcome of the load.
    pub fn complete(self, outcome: Result<Theme, ThemeError>) {
        let status = match outcome {
            Ok(theme) => {
                tracing::info!(theme = %theme.name, "Theme loaded");
                ThemeStatus::Ready(Arc::new(theme))
            }
            Err(e) => match self.policy {
                FailurePolicy::Fallback => {
                    let theme = Theme::fallback();
                    tracing::warn!(
                        error = %e,
                        theme = %theme.name,
                        "Theme load failed, using fallback theme"
                    );
                    ThemeStatus::Ready(Arc::new(theme))
                }
                FailurePolicy::Fail => {
                    tracing::error!(error = %e, "Theme load failed");
                    ThemeStatus::Failed(e.to_string())
                }
            },
        };
        // Receivers may all be gone during shutdown.
        let _ = self.tx.send(status);
    }
}

impl ThemeGate {
    /// Create a pending gate and the handle that settles it.
    pub fn channel(policy: FailurePolicy) -> (Self, ThemeCompleter) {
        let (tx, rx) = watch::channel(ThemeStatus::Loading);
        (Self { rx }, ThemeCompleter { tx, policy })
    }

    /// A gate that is already open.
    pub fn ready(theme: Theme) -> Self {
        let (gate, completer) = Self::channel(FailurePolicy::Fallback);
        completer.complete(Ok(theme));
        gate
    }

    /// Run `load` in the background, bounded by `timeout`.
    pub fn spawn<F>(load: F, policy: FailurePolicy, timeout: Duration) -> Self
    where
        F: Future<Output = Result<Theme, ThemeError>> + Send + 'static,
    {
        let (gate, completer) = Self::channel(policy);
        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, load).await {
                Ok(outcome) => outcome,
                Err(_) => Err(ThemeError::Timeout(timeout)),
            };
            completer.complete(outcome);
        });
        gate
    }

    /// Build the gate described by the theme configuration.
    ///
    /// Without a stylesheet the named theme is available immediately.
    /// Must be called from within a Tokio runtime when a stylesheet is set.
    pub fn from_config(config: &ThemeConfig) -> Self {
        match &config.stylesheet {
            None => Self::ready(Theme::named(config.name.clone())),
            Some(path) => {
                let path = path.clone();
                let name = config.name.clone();
                tracing::info!(path = %path.display(), theme = %name, "Loading theme");
                Self::spawn(
                    async move { load_stylesheet(&path, &name).await },
                    config.on_failure,
                    Duration::from_millis(config.load_timeout_ms),
                )
            }
        }
    }

    /// Current status.
    pub fn status(&self) -> ThemeStatus {
        self.rx.borrow().clone()
    }

    /// Wait until the load has settled.
    pub async fn settled(&self) -> ThemeStatus {
        let mut rx = self.rx.clone();
        let status = match rx.wait_for(ThemeStatus::is_settled).await {
            Ok(status) => status.clone(),
            Err(_) => {
                // The completer was dropped without settling the gate.
                ThemeStatus::Failed("theme loader stopped".to_string())
            }
        };
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn io_error() -> ThemeError {
        ThemeError::Io {
            path: PathBuf::from("dark.css"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
    }

    #[test]
    fn test_gate_starts_loading() {
        let (gate, _completer) = ThemeGate::channel(FailurePolicy::Fallback);
        assert_eq!(gate.status(), ThemeStatus::Loading);
    }

    #[test]
    fn test_success_opens_gate() {
        let (gate, completer) = ThemeGate::channel(FailurePolicy::Fail);
        completer.complete(Ok(Theme::named("dark")));
        assert_eq!(gate.status(), ThemeStatus::Ready(Arc::new(Theme::named("dark"))));
    }

    #[test]
    fn test_failure_with_fallback_policy() {
        let (gate, completer) = ThemeGate::channel(FailurePolicy::Fallback);
        completer.complete(Err(io_error()));
        assert_eq!(gate.status(), ThemeStatus::Ready(Arc::new(Theme::fallback())));
    }

    #[test]
    fn test_failure_with_fail_policy() {
        let (gate, completer) = ThemeGate::channel(FailurePolicy::Fail);
        completer.complete(Err(io_error()));
        assert!(matches!(gate.status(), ThemeStatus::Failed(_)));
    }

    #[tokio::test]
    async fn test_spawned_load_settles() {
        let gate = ThemeGate::spawn(
            async { Ok(Theme::named("dark")) },
            FailurePolicy::Fail,
            Duration::from_secs(1),
        );
        let status = gate.settled().await;
        assert_eq!(status, ThemeStatus::Ready(Arc::new(Theme::named("dark"))));
        assert_eq!(gate.status(), status);
    }

    #[tokio::test]
    async fn test_spawned_load_times_out() {
        let gate = ThemeGate::spawn(
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(Theme::named("dark"))
            },
            FailurePolicy::Fail,
            Duration::from_millis(20),
        );
        match gate.settled().await {
            ThemeStatus::Failed(reason) => assert!(reason.contains("timed out")),
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dropped_completer_reports_failure() {
        let (gate, completer) = ThemeGate::channel(FailurePolicy::Fallback);
        drop(completer);
        assert!(matches!(gate.settled().await, ThemeStatus::Failed(_)));
    }

    #[test]
    fn test_from_config_without_stylesheet_is_ready() {
        let config = ThemeConfig {
            name: "dark".to_string(),
            ..ThemeConfig::default()
        };
        let gate = ThemeGate::from_config(&config);
        assert_eq!(gate.status(), ThemeStatus::Ready(Arc::new(Theme::named("dark"))));
    }
}
