//! Intake boundary turning raw form text into stored projects.

use std::fmt;

use mockable::Clock;
use thiserror::Error;
use tracing::debug;

use crate::board::domain::{
    PeopleCount, Project, ProjectDescription, ProjectDomainError, ProjectTitle,
};
use crate::board::services::ProjectStore;
use crate::validation::{Validatable, validate};

/// Minimum description length accepted by the project form.
const MIN_DESCRIPTION_LENGTH: usize = 5;

/// Smallest headcount accepted by the project form.
const MIN_TEAM_SIZE: i64 = 1;

/// Largest headcount accepted by the project form.
const MAX_TEAM_SIZE: i64 = 5;

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedField {
    /// The title field.
    Title,
    /// The description field.
    Description,
    /// The people field.
    People,
}

impl RejectedField {
    /// Returns the form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

impl fmt::Display for RejectedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of form fields that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFields(Vec<RejectedField>);

impl RejectedFields {
    /// Returns the rejected fields in form order.
    #[must_use]
    pub fn fields(&self) -> &[RejectedField] {
        &self.0
    }

    /// Returns whether the given field was rejected.
    #[must_use]
    pub fn contains(&self, field: RejectedField) -> bool {
        self.0.contains(&field)
    }
}

impl fmt::Display for RejectedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(field.as_str())?;
            first = false;
        }
        Ok(())
    }
}

/// Errors surfaced by the intake boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// One or more form fields failed their declared constraints. No
    /// mutation was performed.
    #[error("project input rejected: invalid {0}")]
    ValidationRejected(RejectedFields),

    /// Domain value construction failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
}

/// Inbound boundary for the project form.
///
/// The render layer collects the raw field text; this service evaluates
/// the form's declared constraints against it and, on success, creates the
/// project through the store. On failure it reports the rejected fields
/// and performs no mutation.
#[derive(Debug)]
pub struct ProjectIntake<C>
where
    C: Clock + Send + Sync,
{
    store: ProjectStore<C>,
}

impl<C> Clone for ProjectIntake<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<C> ProjectIntake<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an intake boundary over a store handle.
    #[must_use]
    pub const fn new(store: ProjectStore<C>) -> Self {
        Self { store }
    }

    /// Submits raw form text for a new project.
    ///
    /// The title must be non-empty, the description at least
    /// `MIN_DESCRIPTION_LENGTH` characters, and the people text must parse
    /// to an integer between `MIN_TEAM_SIZE` and `MAX_TEAM_SIZE`
    /// inclusive. On success the project is created `Active` and every
    /// registered observer receives a broadcast.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::ValidationRejected`] naming every field that
    /// failed; nothing is mutated and nothing is broadcast in that case.
    pub fn submit(
        &self,
        title: &str,
        description: &str,
        people_raw: &str,
    ) -> Result<Project, IntakeError> {
        let people = parse_people(people_raw);

        let mut rejected = Vec::new();
        if !validate(&Validatable::text(title).required()) {
            rejected.push(RejectedField::Title);
        }
        if !validate(
            &Validatable::text(description)
                .required()
                .min_length(MIN_DESCRIPTION_LENGTH),
        ) {
            rejected.push(RejectedField::Description);
        }
        if people.is_none() {
            rejected.push(RejectedField::People);
        }

        match (people, rejected.is_empty()) {
            (Some(people_count), true) => {
                let project_title = ProjectTitle::new(title)?;
                let project_description = ProjectDescription::new(description)?;
                Ok(self
                    .store
                    .add_project(project_title, project_description, people_count))
            }
            _ => {
                let fields = RejectedFields(rejected);
                debug!(%fields, "project input rejected");
                Err(IntakeError::ValidationRejected(fields))
            }
        }
    }
}

/// Parses and validates the people field, absorbing unparseable text into
/// a rejection.
fn parse_people(raw: &str) -> Option<PeopleCount> {
    let value = raw.trim().parse::<i64>().ok()?;
    if !validate(
        &Validatable::number(value)
            .required()
            .min(MIN_TEAM_SIZE)
            .max(MAX_TEAM_SIZE),
    ) {
        return None;
    }
    let count = u32::try_from(value).ok()?;
    PeopleCount::new(count).ok()
}
