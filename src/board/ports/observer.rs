//! Observer port for project collection change notifications.

use crate::board::domain::Project;

/// Contract for consumers of project collection broadcasts.
///
/// The store invokes every registered observer synchronously, in
/// registration order, on each change to the collection. Each invocation
/// receives a structurally independent snapshot: observers may keep, sort,
/// or filter it freely without affecting the store's authoritative
/// collection. Observers must not call back into the store from within
/// the notification.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectObserver {
    /// Handles a fresh snapshot of the full project collection.
    ///
    /// The snapshot is unfiltered; filtering by status is each observer's
    /// own responsibility.
    fn projects_changed(&mut self, snapshot: Vec<Project>);
}

/// Any `FnMut` closure over a snapshot is an observer, so render-layer
/// callbacks can be registered directly with explicit closure capture.
impl<F> ProjectObserver for F
where
    F: FnMut(Vec<Project>),
{
    fn projects_changed(&mut self, snapshot: Vec<Project>) {
        self(snapshot);
    }
}
