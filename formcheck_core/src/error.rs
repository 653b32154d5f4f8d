//! Error types for formcheck.
//!
//! Validation itself never fails: a value that breaks a rule is reported as
//! data through [`crate::ValidationOutcome`]. The errors here cover the
//! surrounding plumbing, such as parsing the compact rule syntax or assigning
//! values to fields by name.

use thiserror::Error;

/// Result type for formcheck operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Main error type for formcheck operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    /// Rule name not recognized
    #[error("Unknown rule '{0}'")]
    UnknownRule(String),

    /// Rule requires a numeric parameter that was not given
    #[error("Rule '{0}' requires a numeric parameter (e.g. '{0}:5')")]
    MissingParameter(String),

    /// Rule parameter is not a non-negative integer
    #[error("Invalid parameter '{value}' for rule '{rule}'")]
    InvalidParameter {
        /// Rule name
        rule: String,
        /// Offending parameter text
        value: String,
    },

    /// Rule takes no parameter but one was given
    #[error("Rule '{0}' does not take a parameter")]
    UnexpectedParameter(String),

    /// No field with the given display name
    #[error("No field named '{0}' in form")]
    UnknownField(String),

    /// Assignment is not of the form NAME=VALUE
    #[error("Invalid assignment '{0}': expected NAME=VALUE")]
    InvalidAssignment(String),
}

impl FormError {
    /// Creates a new invalid parameter error.
    pub fn invalid_parameter(rule: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            rule: rule.into(),
            value: value.into(),
        }
    }
}
