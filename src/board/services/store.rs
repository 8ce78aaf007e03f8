//! Authoritative project store with ordered observer fan-out.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mockable::Clock;
use tracing::{debug, trace};

use crate::board::domain::{
    PeopleCount, Project, ProjectDescription, ProjectId, ProjectStatus, ProjectTitle,
};
use crate::board::ports::ProjectObserver;

/// Single authoritative holder of all projects.
///
/// The store owns the project collection and the observer registry
/// exclusively; all outside access is read-only, through the snapshot
/// handed out on broadcast or through [`ProjectStore::projects`]. Cloning a
/// store yields another handle to the *same* logical instance, so every
/// component that is passed a handle reacts to the same collection. Create
/// one store at process start (lazily if desired) and pass handles by
/// clone.
///
/// Every mutating operation runs to completion within the calling turn:
/// the state lock is acquired, the mutation is applied, every observer is
/// notified synchronously in registration order, and the lock is released.
/// No operation surfaces an error; invalid identifiers and no-op
/// transitions are absorbed silently.
#[derive(Debug)]
pub struct ProjectStore<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<Mutex<BoardState>>,
    clock: Arc<C>,
}

#[derive(Default)]
struct BoardState {
    projects: Vec<Project>,
    observers: Vec<Box<dyn ProjectObserver + Send>>,
}

impl std::fmt::Debug for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardState")
            .field("projects", &self.projects)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<C> Clone for ProjectStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> ProjectStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store backed by the given clock.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(Mutex::new(BoardState::default())),
            clock,
        }
    }

    /// Registers an observer at the end of the notification order.
    ///
    /// There is no de-duplication and no removal: each call appends one
    /// more subscription, and broadcasts always replay in subscription
    /// order.
    pub fn add_listener<O>(&self, observer: O)
    where
        O: ProjectObserver + Send + 'static,
    {
        let mut state = self.lock_state();
        state.observers.push(Box::new(observer));
        trace!(observers = state.observers.len(), "observer registered");
    }

    /// Creates a project with a fresh identifier and `Active` status,
    /// appends it to the collection, and broadcasts.
    ///
    /// The fields are already-validated domain values, so the operation
    /// itself cannot fail. Returns the created project.
    pub fn add_project(
        &self,
        title: ProjectTitle,
        description: ProjectDescription,
        people: PeopleCount,
    ) -> Project {
        let project = Project::new(title, description, people, &*self.clock);
        let mut state = self.lock_state();
        debug!(id = %project.id(), title = project.title().as_str(), "project added");
        state.projects.push(project.clone());
        Self::broadcast(&mut state);
        project
    }

    /// Moves the project with `id` to `new_status` and broadcasts.
    ///
    /// Two cases are absorbed silently, with no broadcast and no error: an
    /// unknown identifier, and a transition to the project's current
    /// status. Callers cannot distinguish "moved" from "already there"
    /// from "vanished"; this mirrors the drop-handling contract, where a
    /// drop may race with the disappearance of its target.
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) {
        let mut state = self.lock_state();
        let Some(project) = state.projects.iter_mut().find(|project| project.id() == id) else {
            trace!(%id, "move ignored: unknown project");
            return;
        };
        if !project.transition(new_status, &*self.clock) {
            trace!(%id, status = new_status.as_str(), "move ignored: status unchanged");
            return;
        }
        debug!(%id, status = new_status.as_str(), "project moved");
        Self::broadcast(&mut state);
    }

    /// Returns an independent snapshot of the collection, in insertion
    /// order.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.lock_state().projects.clone()
    }

    /// Returns a copy of the project with `id`, if present.
    #[must_use]
    pub fn find(&self, id: ProjectId) -> Option<Project> {
        self.lock_state()
            .projects
            .iter()
            .find(|project| project.id() == id)
            .cloned()
    }

    /// Invokes every observer in registration order, handing each its own
    /// independent copy of the collection.
    fn broadcast(state: &mut BoardState) {
        let snapshot = state.projects.clone();
        for observer in &mut state.observers {
            observer.projects_changed(snapshot.clone());
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, BoardState> {
        // Store operations are contractually infallible, so a poisoned
        // lock is recovered rather than propagated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
