//! Lane drop targets resolving drops into status transitions.

use mockable::Clock;
use tracing::trace;

use super::payload::can_accept_drag;
use crate::board::domain::{ProjectId, ProjectStatus};
use crate::board::services::ProjectStore;

/// Contract for the drop-target side of the protocol.
///
/// The render layer forwards its drag-over, drop, and drag-leave events
/// through this trait; only the drop has a store effect.
pub trait DropTarget {
    /// Called while a drag hovers over the target.
    ///
    /// Returns `true` and marks the target droppable when the payload's
    /// declared media type is acceptable; otherwise the default
    /// non-droppable behaviour stands.
    fn drag_over(&mut self, media_type: &str) -> bool;

    /// Called when a payload is dropped on the target.
    fn drop_payload(&mut self, data: &str);

    /// Called when a drag leaves the target; clears the droppable
    /// affordance.
    fn drag_leave(&mut self);
}

/// Drop target for one status lane.
///
/// Each lane represents one [`ProjectStatus`] and holds a handle to the
/// shared store. Dropping a project identifier on a lane moves the project
/// to the lane's status; dropping it on the lane it is already on, or
/// dropping an identifier no project carries, is absorbed silently.
#[derive(Debug, Clone)]
pub struct Lane<C>
where
    C: Clock + Send + Sync,
{
    status: ProjectStatus,
    droppable: bool,
    store: ProjectStore<C>,
}

impl<C> Lane<C>
where
    C: Clock + Send + Sync,
{
    /// Creates the drop target for `status` over a store handle.
    #[must_use]
    pub const fn new(status: ProjectStatus, store: ProjectStore<C>) -> Self {
        Self {
            status,
            droppable: false,
            store,
        }
    }

    /// Returns the status this lane represents.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns whether the droppable visual affordance is currently shown.
    #[must_use]
    pub const fn is_droppable(&self) -> bool {
        self.droppable
    }
}

impl<C> DropTarget for Lane<C>
where
    C: Clock + Send + Sync,
{
    fn drag_over(&mut self, media_type: &str) -> bool {
        if !can_accept_drag(media_type) {
            return false;
        }
        self.droppable = true;
        true
    }

    fn drop_payload(&mut self, data: &str) {
        let Ok(id) = data.parse::<ProjectId>() else {
            trace!(payload = data, "drop ignored: payload is not a project id");
            return;
        };
        self.store.move_project(id, self.status);
    }

    fn drag_leave(&mut self) {
        self.droppable = false;
    }
}
