//! Message localization.
//!
//! Rules never build display text themselves. They hand a message key and a
//! list of positional arguments to a [`Localizer`], which is injected by the
//! caller. Any `Fn(&str, &[MessageArg]) -> String` is a localizer, and
//! [`MessageCatalog`] provides an in-memory table with English defaults.
//!
//! Templates use `{}` for the next argument and `{N}` for the argument at
//! zero-based position `N`. `{{` and `}}` produce literal braces.

use std::collections::HashMap;
use std::fmt;

/// Well-known message keys.
pub mod keys {
    /// A required value is empty.
    pub const REQUIRED: &str = "error.required";
    /// A value contains characters other than ASCII letters and digits.
    pub const INVALID_ALPHA: &str = "error.invalid_alpha";
    /// A value contains fewer separating spaces than required.
    pub const CONTAIN_SPACES: &str = "error.contain_spaces";
    /// A value is not a plausible personal name.
    pub const INCORRECT_NAME: &str = "error.incorrect_name";
    /// A value is too long.
    pub const LESS_THAN: &str = "error.less_than";
    /// A value is too short.
    pub const GREATER_THAN: &str = "error.greater_than";
    /// A value is not an email address.
    pub const INVALID_EMAIL: &str = "error.invalid_email";
    /// Label of the action dismissing a failure report.
    pub const OK: &str = "global.ok";
    /// Title of a failure report. Not used by the validator.
    pub const GLOBAL_ERROR: &str = "global_error";
}

/// A positional argument substituted into a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageArg {
    /// Free text, such as a field name or the offending value
    Text(String),
    /// A count of characters or spaces
    Count(usize),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Text(text) => f.write_str(text),
            MessageArg::Count(count) => write!(f, "{}", count),
        }
    }
}

impl From<&str> for MessageArg {
    fn from(text: &str) -> Self {
        MessageArg::Text(text.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(text: String) -> Self {
        MessageArg::Text(text)
    }
}

impl From<usize> for MessageArg {
    fn from(count: usize) -> Self {
        MessageArg::Count(count)
    }
}

/// Turns a message key and its arguments into display text.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{Localizer, MessageArg};
///
/// let shout = |key: &str, args: &[MessageArg]| format!("{}!{}", key, args.len());
/// assert_eq!(shout.localize("error.required", &["Name".into()]), "error.required!1");
/// ```
pub trait Localizer {
    /// Resolves `key` and substitutes `args` into the resulting template.
    fn localize(&self, key: &str, args: &[MessageArg]) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str, &[MessageArg]) -> String,
{
    fn localize(&self, key: &str, args: &[MessageArg]) -> String {
        self(key, args)
    }
}

/// Resolves an optional key, yielding an empty string when it is absent.
pub fn localize_optional<L: Localizer + ?Sized>(localizer: &L, key: Option<&str>) -> String {
    match key {
        Some(key) => localizer.localize(key, &[]),
        None => String::new(),
    }
}

/// In-memory table of message templates.
///
/// Unknown keys fall back to the key itself, formatted with the same
/// arguments, so a missing translation still yields something readable.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in English templates.
    pub fn english() -> Self {
        Self::new()
            .with(keys::REQUIRED, "{0} is required.")
            .with(keys::INVALID_ALPHA, "{0} must contain only letters and digits.")
            .with(keys::CONTAIN_SPACES, "{0} must contain at least {1} space(s).")
            .with(keys::INCORRECT_NAME, "{0} contains invalid characters.")
            .with(keys::LESS_THAN, "{0} must be at most {1} characters long.")
            .with(keys::GREATER_THAN, "{0} must be at least {1} characters long.")
            .with(keys::INVALID_EMAIL, "{0} is not a valid email address.")
            .with(keys::OK, "OK")
            .with(keys::GLOBAL_ERROR, "Error")
    }

    /// Adds or replaces a template.
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Adds or replaces a template in place.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Returns the raw template for `key`, if present.
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Number of templates in the catalog.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Localizer for MessageCatalog {
    fn localize(&self, key: &str, args: &[MessageArg]) -> String {
        let template = self.template(key).unwrap_or(key);
        format_template(template, args)
    }
}

/// Substitutes `args` into `template`.
///
/// Placeholders without a matching argument are kept as written.
pub fn format_template(template: &str, args: &[MessageArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut rest = template;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix('}') {
            out.push('}');
            rest = after;
            continue;
        }

        let Some(end) = tail[1..].find('}') else {
            // Unterminated placeholder
            out.push_str(tail);
            rest = "";
            break;
        };

        let placeholder = &tail[..end + 2];
        let inner = &tail[1..end + 1];
        let index = if inner.is_empty() {
            next += 1;
            Some(next - 1)
        } else {
            inner.parse::<usize>().ok()
        };

        match index.and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str(placeholder),
        }
        rest = &tail[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_positional() {
        let args = vec![MessageArg::from("Name"), MessageArg::Count(4)];
        assert_eq!(
            format_template("{0} must be at most {1} characters long.", &args),
            "Name must be at most 4 characters long."
        );
        assert_eq!(format_template("{1}/{0}", &args), "4/Name");
    }

    #[test]
    fn test_format_sequential() {
        let args = vec![MessageArg::from("a"), MessageArg::from("b")];
        assert_eq!(format_template("{} then {}", &args), "a then b");
    }

    #[test]
    fn test_format_missing_argument_kept() {
        let args = vec![MessageArg::from("only")];
        assert_eq!(format_template("{0} and {1}", &args), "only and {1}");
        assert_eq!(format_template("{name}", &args), "{name}");
    }

    #[test]
    fn test_format_escaped_braces() {
        let args = vec![MessageArg::Count(3)];
        assert_eq!(format_template("{{{0}}}", &args), "{3}");
        assert_eq!(format_template("open { end", &args), "open { end");
    }

    #[test]
    fn test_format_multibyte_text() {
        let args = vec![MessageArg::from("Prénom")];
        assert_eq!(format_template("« {0} » requis", &args), "« Prénom » requis");
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = MessageCatalog::english();
        assert_eq!(
            catalog.localize(keys::REQUIRED, &["Email".into()]),
            "Email is required."
        );
        assert_eq!(catalog.localize(keys::OK, &[]), "OK");
    }

    #[test]
    fn test_catalog_falls_back_to_key() {
        let catalog = MessageCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.localize("error.unknown", &[]), "error.unknown");
    }

    #[test]
    fn test_catalog_override() {
        let catalog = MessageCatalog::english().with(keys::REQUIRED, "« {0} » est obligatoire");
        assert_eq!(
            catalog.localize(keys::REQUIRED, &["Nom".into()]),
            "« Nom » est obligatoire"
        );
    }

    #[test]
    fn test_localize_optional() {
        let catalog = MessageCatalog::english();
        assert_eq!(localize_optional(&catalog, None), "");
        assert_eq!(localize_optional(&catalog, Some(keys::OK)), "OK");
    }

    #[test]
    fn test_closure_localizer() {
        let localizer = |key: &str, args: &[MessageArg]| format!("{}:{}", key, args.len());
        assert_eq!(localizer.localize("k", &[MessageArg::Count(1)]), "k:1");
    }
}
