//! Drag-and-drop status-transition protocol.
//!
//! The render layer owns the actual pointer events; this module defines
//! the contract it reports them through and executes their effect on the
//! store. A drag source supplies the dragged project's identifier as a
//! plain-text payload with a `move` transfer effect; a drop target — one
//! [`Lane`] per status — accepts matching payloads and resolves a drop
//! into the store's transition operation.

mod lane;
mod payload;

pub use lane::{DropTarget, Lane};
pub use payload::{DragPayload, DragSource, PROJECT_ID_MEDIA_TYPE, TransferEffect, can_accept_drag};
