//! Form-level validation.
//!
//! A [`FormValidator`] checks an ordered list of fields in one pass. The
//! boolean check stops at the first invalid field. The full check visits
//! every field and returns a [`ValidationOutcome`] that a presentation layer
//! can turn into an alert, a dialog or terminal output.

use crate::{Field, Localizer};
use tracing::debug;

/// Result of a full form check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome<'a> {
    /// Every field is valid
    Passed,
    /// At least one field is invalid
    Failed(ValidationFailure<'a>),
}

impl<'a> ValidationOutcome<'a> {
    /// Whether every field passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationOutcome::Passed)
    }

    /// Failure details, if any.
    pub fn failure(&self) -> Option<&ValidationFailure<'a>> {
        match self {
            ValidationOutcome::Passed => None,
            ValidationOutcome::Failed(failure) => Some(failure),
        }
    }
}

/// Failure report of a form check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure<'a> {
    /// Newline-joined error text of the invalid fields
    pub message: String,

    /// Invalid fields, in form order
    pub fields_in_error: Vec<&'a Field>,
}

impl ValidationFailure<'_> {
    /// Display names of the invalid fields.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields_in_error
            .iter()
            .map(|f| f.display_name.as_str())
            .collect()
    }
}

/// Validates a set of fields as one form.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{FieldBuilder, FormValidator, MessageCatalog, Rule};
///
/// let validator = FormValidator::new(vec![
///     FieldBuilder::new("First name", "").rule(Rule::NotEmpty).build(),
///     FieldBuilder::new("Last name", "").rule(Rule::NotEmpty).build(),
/// ])
/// .with_stop_on_first_error(true);
///
/// let outcome = validator.check(&MessageCatalog::english());
/// let failure = outcome.failure().unwrap();
/// assert_eq!(failure.message, "First name is required.");
/// assert_eq!(failure.fields_in_error.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidator {
    fields: Vec<Field>,
    stop_on_first_error: bool,
}

impl FormValidator {
    /// Creates a validator owning `fields`.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            stop_on_first_error: false,
        }
    }

    /// Sets whether the failure message is cut down to its first line.
    pub fn with_stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    /// Whether the failure message is cut down to its first line.
    pub fn stop_on_first_error(&self) -> bool {
        self.stop_on_first_error
    }

    /// Fields, in check order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields, for updating values between checks.
    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    /// Adds a field at the end of the form.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Whether every field is valid.
    ///
    /// An empty form is valid. Stops at the first invalid field.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Checks every field and reports the invalid ones.
    ///
    /// Error text of the invalid fields is joined with newlines. When
    /// `stop_on_first_error` is set, only the text before the first newline is
    /// kept; the list of invalid fields is never shortened.
    pub fn check<L: Localizer + ?Sized>(&self, localizer: &L) -> ValidationOutcome<'_> {
        let mut fields_in_error = Vec::new();
        let mut messages = Vec::new();

        for field in &self.fields {
            if !field.is_valid() {
                debug!("Field '{}' is invalid", field.display_name);
                fields_in_error.push(field);
                messages.push(field.error_message(localizer));
            }
        }

        if fields_in_error.is_empty() {
            debug!("All {} fields are valid", self.fields.len());
            return ValidationOutcome::Passed;
        }

        let mut message = messages.join("\n");
        if self.stop_on_first_error {
            if let Some(end) = message.find('\n') {
                message.truncate(end);
            }
        }

        debug!(
            "{} of {} fields are invalid",
            fields_in_error.len(),
            self.fields.len()
        );

        ValidationOutcome::Failed(ValidationFailure {
            message,
            fields_in_error,
        })
    }

    /// Checks every field and calls exactly one of the continuations.
    ///
    /// Convenience over [`FormValidator::check`] for callers structured
    /// around success/failure handlers.
    pub fn check_with<L, S, F>(&self, localizer: &L, on_success: S, on_failure: F)
    where
        L: Localizer + ?Sized,
        S: FnOnce(),
        F: FnOnce(&str, &[&Field]),
    {
        match self.check(localizer) {
            ValidationOutcome::Passed => on_success(),
            ValidationOutcome::Failed(failure) => {
                on_failure(failure.message.as_str(), failure.fields_in_error.as_slice())
            }
        }
    }
}
