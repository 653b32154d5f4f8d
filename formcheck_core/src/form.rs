//! Declarative form definitions.

use crate::{Field, FormError, FormValidator, Result};
use serde::{Deserialize, Serialize};

/// A form definition: a named, ordered list of fields with their values and rules.
///
/// This is the shape of a form file once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Form name
    pub name: String,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Report only the first failing field
    #[serde(default)]
    pub stop_on_first_error: bool,

    /// Fields, checked in order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Form {
    /// Looks up a field by display name.
    pub fn field(&self, display_name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.display_name == display_name)
    }

    /// Looks up a field by display name for modification.
    pub fn field_mut(&mut self, display_name: &str) -> Option<&mut Field> {
        self.fields
            .iter_mut()
            .find(|f| f.display_name == display_name)
    }

    /// Replaces the value of the field named `display_name`.
    pub fn set_value(&mut self, display_name: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .field_mut(display_name)
            .ok_or_else(|| FormError::UnknownField(display_name.to_string()))?;
        field.set_value(value);
        Ok(())
    }

    /// Applies an assignment of the form `NAME=VALUE`.
    ///
    /// Only the first `=` separates name from value, so values may contain `=`.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| FormError::InvalidAssignment(assignment.to_string()))?;
        self.set_value(name, value)
    }

    /// Turns the definition into a validator owning its fields.
    pub fn into_validator(self) -> FormValidator {
        FormValidator::new(self.fields).with_stop_on_first_error(self.stop_on_first_error)
    }
}
