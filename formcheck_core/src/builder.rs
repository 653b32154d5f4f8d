//! Builder pattern for creating fields and forms.
//!
//! This module provides ergonomic builders for constructing fields and form
//! definitions with a fluent API.

use crate::{Field, Form, Rule};

/// Builder for creating a `Field`.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{FieldBuilder, Rule};
///
/// let field = FieldBuilder::new("Username", "jdoe42")
///     .rule(Rule::NotEmpty)
///     .rule(Rule::Alphanumeric)
///     .build();
///
/// assert!(field.is_valid());
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    display_name: String,
    value: String,
    required: bool,
    rules: Vec<Rule>,
    override_message: Option<String>,
}

impl FieldBuilder {
    /// Creates a new field builder.
    ///
    /// # Arguments
    ///
    /// * `display_name` - Name shown in failure messages
    /// * `value` - Current value of the input
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            required: true,
            rules: Vec::new(),
            override_message: None,
        }
    }

    /// Sets whether an empty value must still satisfy the rules.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Adds a rule to the field.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple rules to the field.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the message reported instead of the per-rule messages.
    pub fn override_message(mut self, message: impl Into<String>) -> Self {
        self.override_message = Some(message.into());
        self
    }

    /// Builds the field.
    pub fn build(self) -> Field {
        Field {
            display_name: self.display_name,
            value: self.value,
            required: self.required,
            rules: self.rules,
            override_message: self.override_message,
        }
    }
}

/// Builder for creating a `Form`.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{FieldBuilder, FormBuilder, Rule};
///
/// let form = FormBuilder::new("signup")
///     .description("Account creation")
///     .field(FieldBuilder::new("Email", "jdoe@example.com").rule(Rule::Email).build())
///     .build();
///
/// assert_eq!(form.fields.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FormBuilder {
    name: String,
    description: Option<String>,
    stop_on_first_error: bool,
    fields: Vec<Field>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the form description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reports only the first failing field.
    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    /// Adds a field to the form.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds multiple fields to the form.
    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Builds the form.
    pub fn build(self) -> Form {
        Form {
            name: self.name,
            description: self.description,
            stop_on_first_error: self.stop_on_first_error,
            fields: self.fields,
        }
    }
}
