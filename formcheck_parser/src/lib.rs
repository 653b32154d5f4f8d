//! Parser for formcheck form definitions (YAML/TOML formats).
//!
//! This module parses form definitions from YAML and TOML files into the
//! strongly-typed `Form` structure. When a definition does not deserialize,
//! the error names the offending field entry rather than only the document
//! position, and a definition whose field names are empty or repeated is
//! rejected, since `--set NAME=VALUE` addresses fields by name.
//!
//! # Example
//!
//! ```rust
//! use formcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: signup
//! fields:
//!   - name: Username
//!     value: jdoe42
//!     rules: [not_empty, alphanumeric, { length_less_than: 17 }]
//! "#;
//!
//! let form = parse_yaml(yaml).expect("Failed to parse form");
//! assert_eq!(form.name, "signup");
//! assert!(form.into_validator().is_valid());
//! ```

use formcheck_core::{Field, Form};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during form parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A single entry of `fields` does not describe a valid field
    #[error("Invalid field #{index} ('{name}'): {message}")]
    InvalidField {
        index: usize,
        name: String,
        message: String,
    },

    /// A field entry has an empty display name
    #[error("Field #{index} has an empty name")]
    EmptyFieldName { index: usize },

    /// Two field entries share a display name
    #[error("Duplicate field name '{0}'")]
    DuplicateField(String),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported form file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Placeholder for a field entry that has no readable `name`.
const UNNAMED_FIELD: &str = "<unnamed>";

/// Parse a form from a YAML string.
pub fn parse_yaml(content: &str) -> Result<Form> {
    match serde_yaml_ng::from_str::<Form>(content) {
        Ok(form) => check_field_names(form),
        Err(err) => Err(locate_yaml_field(content).unwrap_or(ParserError::YamlError(err))),
    }
}

/// Re-reads a YAML document that failed to deserialize and reports the first
/// entry of `fields` that is not a valid field, if the failure lies there.
fn locate_yaml_field(content: &str) -> Option<ParserError> {
    use serde_yaml_ng::Value;

    let document: Value = serde_yaml_ng::from_str(content).ok()?;
    let entries = document.get("fields")?.as_sequence()?;

    entries.iter().enumerate().find_map(|(index, entry)| {
        let err = serde_yaml_ng::from_value::<Field>(entry.clone()).err()?;
        let name = entry.get("name").and_then(Value::as_str);
        Some(invalid_field(index, name, err.to_string()))
    })
}

/// Parse a form from a TOML string.
///
/// # Example
///
/// ```rust
/// use formcheck_parser::parse_toml;
///
/// let toml = r#"
/// name = "contact"
///
/// [[fields]]
/// name = "Email"
/// value = "someone@example.com"
/// rules = ["not_empty", "email"]
/// "#;
///
/// let form = parse_toml(toml).unwrap();
/// assert_eq!(form.fields.len(), 1);
/// ```
pub fn parse_toml(content: &str) -> Result<Form> {
    match toml::from_str::<Form>(content) {
        Ok(form) => check_field_names(form),
        Err(err) => Err(locate_toml_field(content)
            .unwrap_or_else(|| ParserError::TomlError(err.to_string()))),
    }
}

/// TOML counterpart of [`locate_yaml_field`].
fn locate_toml_field(content: &str) -> Option<ParserError> {
    let document: toml::Table = toml::from_str(content).ok()?;
    let entries = document.get("fields")?.as_array()?;

    entries.iter().enumerate().find_map(|(index, entry)| {
        let err = entry.clone().try_into::<Field>().err()?;
        let name = entry.get("name").and_then(toml::Value::as_str);
        Some(invalid_field(index, name, err.message().to_string()))
    })
}

fn invalid_field(index: usize, name: Option<&str>, message: String) -> ParserError {
    debug!("Field #{} of form definition rejected: {}", index, message);
    ParserError::InvalidField {
        index,
        name: name.unwrap_or(UNNAMED_FIELD).to_string(),
        message,
    }
}

/// Rejects empty and repeated display names.
fn check_field_names(form: Form) -> Result<Form> {
    let mut seen = HashSet::new();
    for (index, field) in form.fields.iter().enumerate() {
        if field.display_name.trim().is_empty() {
            return Err(ParserError::EmptyFieldName { index });
        }
        if !seen.insert(field.display_name.as_str()) {
            return Err(ParserError::DuplicateField(field.display_name.clone()));
        }
    }
    Ok(form)
}

/// Detect the form format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `FormFormat::Yaml`
/// * `.toml` → `FormFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<FormFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FormFormat::Yaml),
        "toml" => Ok(FormFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a form from a file with automatic format detection.
///
/// ```no_run
/// use formcheck_parser::parse_file;
/// use std::path::Path;
///
/// let form = parse_file(Path::new("forms/signup.yml")).unwrap();
/// println!("Loaded form: {}", form.name);
/// ```
pub fn parse_file(path: &Path) -> Result<Form> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!("Parsing {:?} form from {}", format, path.display());

    match format {
        FormFormat::Yaml => parse_yaml(&content),
        FormFormat::Toml => parse_toml(&content),
    }
}
