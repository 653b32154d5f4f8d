//! Form fields.

use crate::{Localizer, Rule};
use serde::{Deserialize, Serialize};

fn default_required() -> bool {
    true
}

/// A named value under validation together with the rules that apply to it.
///
/// The value may be replaced between checks, for example when re-reading a
/// live input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Name shown to the user in failure messages
    #[serde(rename = "name")]
    pub display_name: String,

    /// Current value of the input
    #[serde(default)]
    pub value: String,

    /// Whether an empty value must still satisfy the rules
    #[serde(default = "default_required")]
    pub required: bool,

    /// Rules, evaluated in order
    #[serde(default)]
    pub rules: Vec<Rule>,

    /// Message reported instead of the per-rule messages
    #[serde(rename = "message", default, skip_serializing_if = "Option::is_none")]
    pub override_message: Option<String>,
}

impl Field {
    /// Creates a required field with no rules.
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            required: true,
            rules: Vec::new(),
            override_message: None,
        }
    }

    /// Whether the current value satisfies every rule.
    ///
    /// An optional field left empty is always valid.
    pub fn is_valid(&self) -> bool {
        if !self.required && self.value.is_empty() {
            return true;
        }

        self.rules.iter().all(|rule| rule.is_valid(Some(self.value.as_str())))
    }

    /// Rules the current value breaks, in declaration order.
    ///
    /// This does not apply the optional-and-empty exemption of [`Field::is_valid`].
    pub fn failing_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(|rule| !rule.is_valid(Some(self.value.as_str())))
    }

    /// Failure text for this field.
    ///
    /// Returns the override message verbatim when one is set. Otherwise every
    /// failing rule contributes one line, so a value breaking several rules
    /// reports all of them.
    pub fn error_message<L: Localizer + ?Sized>(&self, localizer: &L) -> String {
        if let Some(message) = &self.override_message {
            return message.clone();
        }

        self.failing_rules()
            .map(|rule| rule.message(localizer, &self.display_name, &self.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Sets the message reported instead of the per-rule messages.
    pub fn set_override_message(&mut self, message: impl Into<String>) {
        self.override_message = Some(message.into());
    }

    /// Goes back to per-rule messages.
    pub fn clear_override_message(&mut self) {
        self.override_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldBuilder, MessageCatalog};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_optional_empty_field_is_valid() {
        let field = FieldBuilder::new("Nickname", "")
            .required(false)
            .rule(Rule::NotEmpty)
            .rule(Rule::LengthGreaterThan(3))
            .rule(Rule::Email)
            .build();

        assert!(field.is_valid());
    }

    #[test]
    fn test_optional_field_with_value_is_checked() {
        let field = FieldBuilder::new("Nickname", "ab")
            .required(false)
            .rule(Rule::LengthGreaterThan(3))
            .build();

        assert!(!field.is_valid());
    }

    #[test]
    fn test_required_empty_field_reports_required() {
        let field = FieldBuilder::new("Last name", "")
            .rule(Rule::NotEmpty)
            .build();

        assert!(!field.is_valid());
        assert_eq!(
            field.error_message(&MessageCatalog::english()),
            "Last name is required."
        );
    }

    #[test]
    fn test_error_message_lists_every_failing_rule() {
        let field = FieldBuilder::new("Username", "a b")
            .rule(Rule::NotEmpty)
            .rule(Rule::Alphanumeric)
            .rule(Rule::LengthGreaterThan(5))
            .build();

        let message = field.error_message(&MessageCatalog::english());
        assert_eq!(
            message,
            "Username must contain only letters and digits.\n\
             Username must be at least 6 characters long."
        );
        assert_eq!(message.lines().count(), 2);
    }

    #[test]
    fn test_valid_field_has_empty_message() {
        let field = FieldBuilder::new("Code", "abc").rule(Rule::NotEmpty).build();
        assert!(field.is_valid());
        assert_eq!(field.error_message(&MessageCatalog::english()), "");
    }

    #[test]
    fn test_override_message_wins() {
        let mut field = FieldBuilder::new("Password", "x")
            .rule(Rule::LengthGreaterThan(7))
            .rule(Rule::Alphanumeric)
            .override_message("Choose a stronger password.")
            .build();

        let catalog = MessageCatalog::english();
        assert_eq!(field.error_message(&catalog), "Choose a stronger password.");

        field.clear_override_message();
        assert_eq!(
            field.error_message(&catalog),
            "Password must be at least 8 characters long."
        );
    }

    #[test]
    fn test_set_value_changes_outcome() {
        let mut field = Field::new("Email", "nope");
        field.rules.push(Rule::Email);
        assert!(!field.is_valid());

        field.set_value("someone@example.com");
        assert!(field.is_valid());
    }

    #[test]
    fn test_field_without_rules_is_valid() {
        assert!(Field::new("Anything", "").is_valid());
    }
}
