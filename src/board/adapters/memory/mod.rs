//! In-memory observer adapters.

mod recording;

pub use recording::RecordingObserver;
