//! View bundle loading.

use std::future::Future;
use std::pin::Pin;

use crate::views::ViewId;

/// Future returned by a view load.
pub type LoadFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Fetches whatever a view needs before it can render.
///
/// Called at most once per view; the registry marks the view loaded when
/// the returned future completes.
pub trait ViewLoader: Send + Sync + std::fmt::Debug {
    fn load(&self, view: ViewId) -> LoadFuture;
}
