//! Pinboard: an in-memory project board state engine.
//!
//! This crate provides the core state and notification machinery for a
//! two-lane project board: projects carry a title, description, and
//! headcount, start out `Active`, and move between `Active` and `Finished`
//! through a drag-and-drop status-transition protocol. Rendering and raw
//! input acquisition are external collaborators; this crate owns the
//! single authoritative project collection, the ordered observer fan-out,
//! and the status-transition rules.
//!
//! # Architecture
//!
//! Pinboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (recording observers, etc.)
//!
//! # Modules
//!
//! - [`board`]: Project domain model, authoritative store, and intake boundary
//! - [`dragdrop`]: Drag-and-drop status-transition protocol
//! - [`validation`]: Declarative field-constraint engine

pub mod board;
pub mod dragdrop;
pub mod validation;
