//! Declarative field-constraint engine.
//!
//! A [`Validatable`] pairs a raw field value with the constraints the form
//! declares for it; [`validate`] evaluates them as a pure function with no
//! store or render dependency. Constraints whose value-type precondition
//! is not met (a length bound on a number, a range bound on text) are
//! silently inapplicable rather than violated.

/// Raw field value under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Textual form input.
    Text(String),
    /// Numeric form input.
    Number(i64),
}

impl FieldValue {
    /// Returns whether the trimmed text form of the value is non-empty.
    ///
    /// A number's text form is never empty, so numbers always have
    /// content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Number(_) => true,
        }
    }
}

/// A field value together with the constraints declared for it.
///
/// Built with chained constraint methods:
///
/// ```
/// use pinboard::validation::{Validatable, validate};
///
/// let descriptor = Validatable::text("hi").required().min_length(5);
/// assert!(!validate(&descriptor));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validatable {
    value: FieldValue,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<i64>,
    max: Option<i64>,
}

impl Validatable {
    /// Creates an unconstrained descriptor for a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    /// Creates an unconstrained descriptor for a numeric value.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    const fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires the trimmed text form of the value to be non-empty.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires text values to have at least `length` characters.
    #[must_use]
    pub const fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Requires text values to have at most `length` characters.
    #[must_use]
    pub const fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Requires numeric values to be at least `bound`, inclusive.
    #[must_use]
    pub const fn min(mut self, bound: i64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires numeric values to be at most `bound`, inclusive.
    #[must_use]
    pub const fn max(mut self, bound: i64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Evaluates every constraint declared on the descriptor.
///
/// All configured constraints must pass; absent constraints are vacuously
/// satisfied, as are constraints that do not apply to the value's type.
/// Deterministic, with no side effects.
#[must_use]
pub fn validate(descriptor: &Validatable) -> bool {
    if descriptor.required && !descriptor.value.has_content() {
        return false;
    }
    match &descriptor.value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            if descriptor.min_length.is_some_and(|bound| length < bound) {
                return false;
            }
            if descriptor.max_length.is_some_and(|bound| length > bound) {
                return false;
            }
        }
        FieldValue::Number(number) => {
            if descriptor.min.is_some_and(|bound| *number < bound) {
                return false;
            }
            if descriptor.max.is_some_and(|bound| *number > bound) {
                return false;
            }
        }
    }
    true
}
