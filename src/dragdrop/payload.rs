//! Drag payload and drag-source contract.

use serde::{Deserialize, Serialize};

use crate::board::domain::Project;

/// Media type declared for project identifier payloads.
pub const PROJECT_ID_MEDIA_TYPE: &str = "text/plain";

/// Pure predicate consulted by drag-over handlers before showing the
/// droppable affordance.
#[must_use]
pub fn can_accept_drag(media_type: &str) -> bool {
    media_type == PROJECT_ID_MEDIA_TYPE
}

/// Transfer effect declared when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferEffect {
    /// The dragged item is moved to the drop target.
    Move,
    /// The dragged item is copied to the drop target.
    Copy,
}

/// Payload transferred while a project row is being dragged.
///
/// Carries the project identifier in textual form and always declares the
/// [`TransferEffect::Move`] effect: dragging a project relocates it
/// between lanes, it never duplicates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    data: String,
    effect: TransferEffect,
}

impl DragPayload {
    /// Creates the payload for dragging the given project.
    #[must_use]
    pub fn for_project(project: &Project) -> Self {
        Self {
            data: project.id().to_string(),
            effect: TransferEffect::Move,
        }
    }

    /// Returns the transferred data: the project identifier as text.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the declared transfer effect.
    #[must_use]
    pub const fn effect(&self) -> TransferEffect {
        self.effect
    }

    /// Returns the declared media type of the payload.
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        PROJECT_ID_MEDIA_TYPE
    }
}

/// Contract for items the render layer lets the user pick up.
pub trait DragSource {
    /// Called when a drag starts; supplies the payload to transfer.
    fn drag_start(&self) -> DragPayload;

    /// Called when a drag ends. Informational only: no state changes.
    fn drag_end(&self) {}
}

impl DragSource for Project {
    fn drag_start(&self) -> DragPayload {
        DragPayload::for_project(self)
    }
}
