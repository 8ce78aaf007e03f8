//! Project aggregate root and status lifecycle types.

use super::{ParseProjectStatusError, PeopleCount, ProjectDescription, ProjectId, ProjectTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
///
/// A project always starts `Active`. Both transition directions are legal
/// and there is no terminal status: a project may move between the two
/// lanes indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is on the active lane.
    Active,
    /// Project is on the finished lane.
    Finished,
}

impl ProjectStatus {
    /// Returns the canonical textual representation, matching the lane
    /// identifiers used by the render layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Project aggregate root.
///
/// Identity and the descriptive fields are immutable for the project's
/// lifetime; `status` is the only mutable field and is mutated exclusively
/// through the store's transition operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: ProjectTitle,
    description: ProjectDescription,
    people: PeopleCount,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with a fresh identifier and `Active` status.
    #[must_use]
    pub fn new(
        title: ProjectTitle,
        description: ProjectDescription,
        people: PeopleCount,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub const fn title(&self) -> &ProjectTitle {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub const fn description(&self) -> &ProjectDescription {
        &self.description
    }

    /// Returns the assigned headcount.
    #[must_use]
    pub const fn people(&self) -> PeopleCount {
        self.people
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest status-change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the project to `new_status`.
    ///
    /// Returns `true` when the status actually changed. A transition to the
    /// current status is not observable as a change: the status and the
    /// `updated_at` timestamp are left untouched and `false` is returned.
    pub fn transition(&mut self, new_status: ProjectStatus, clock: &impl Clock) -> bool {
        if self.status == new_status {
            return false;
        }
        self.status = new_status;
        self.touch(clock);
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
