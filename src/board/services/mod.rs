//! Application services for the project board.

mod intake;
mod store;

pub use intake::{IntakeError, ProjectIntake, RejectedField, RejectedFields};
pub use store::ProjectStore;
