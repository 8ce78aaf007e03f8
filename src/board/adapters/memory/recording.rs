//! In-memory observer recording every broadcast it receives.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::board::domain::Project;
use crate::board::ports::ProjectObserver;

/// Observer that records each snapshot it is handed.
///
/// Cloning yields another handle to the same recording, so a clone can be
/// registered with the store while the original is kept for inspection.
/// Useful in tests and for embedders that want a change log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    snapshots: Arc<Mutex<Vec<Vec<Project>>>>,
}

impl RecordingObserver {
    /// Creates an empty recording observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of broadcasts received so far.
    #[must_use]
    pub fn broadcast_count(&self) -> usize {
        self.lock_snapshots().len()
    }

    /// Returns every snapshot received so far, in broadcast order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<Vec<Project>> {
        self.lock_snapshots().clone()
    }

    /// Returns the most recent snapshot, if any broadcast has arrived.
    #[must_use]
    pub fn last_snapshot(&self) -> Option<Vec<Project>> {
        self.lock_snapshots().last().cloned()
    }

    fn lock_snapshots(&self) -> MutexGuard<'_, Vec<Vec<Project>>> {
        // Recording never leaves the log in an inconsistent state, so a
        // poisoned lock can be recovered from.
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProjectObserver for RecordingObserver {
    fn projects_changed(&mut self, snapshot: Vec<Project>) {
        self.lock_snapshots().push(snapshot);
    }
}
