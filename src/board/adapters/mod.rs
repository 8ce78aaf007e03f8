//! Adapter implementations of board ports.

pub mod memory;

pub use memory::RecordingObserver;
