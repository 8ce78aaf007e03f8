//! Domain model for the project board.
//!
//! The board domain models project creation, the two-valued status
//! lifecycle, and the validated scalar fields a project carries, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod project;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use fields::{PeopleCount, ProjectDescription, ProjectTitle};
pub use ids::ProjectId;
pub use project::{Project, ProjectStatus};
