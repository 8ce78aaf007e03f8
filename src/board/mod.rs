//! Project board state management for Pinboard.
//!
//! This module implements the authoritative project collection: creating
//! projects from validated form input, transitioning projects between the
//! `Active` and `Finished` statuses, and broadcasting an independent
//! snapshot of the full collection to every registered observer on each
//! change. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
