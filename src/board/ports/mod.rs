//! Port contracts for the project board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod observer;

pub use observer::ProjectObserver;
