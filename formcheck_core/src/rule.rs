//! Validation rules.
//!
//! A [`Rule`] is a pure predicate over a string value together with the
//! message template reported when the predicate fails. Rules carry their own
//! parameters, so evaluating and describing a failure need nothing else.

use crate::{FormError, Localizer, MessageArg, keys};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s'-]+$").expect("valid regex"));

static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$").expect("valid regex")
});

/// A single validation predicate.
///
/// Serialized in snake_case: unit rules are plain strings (`not_empty`) and
/// parameterized rules are single-key maps (`length_less_than: 5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Value has at least one character
    NotEmpty,

    /// Value is made of ASCII letters and digits only
    Alphanumeric,

    /// Value contains at least `n` space separators
    ContainsAtLeastNSpaces(usize),

    /// Value looks like a personal name: letters, whitespace, apostrophes, hyphens
    NamePattern,

    /// Value has fewer than `n` user-perceived characters (grapheme clusters)
    LengthLessThan(usize),

    /// Value has more than `n` user-perceived characters
    LengthGreaterThan(usize),

    /// Value looks like an email address
    Email,
}

impl Rule {
    /// Names accepted by [`Rule::from_str`], in declaration order.
    pub const NAMES: [&'static str; 7] = [
        "not_empty",
        "alphanumeric",
        "contains_at_least_n_spaces",
        "name_pattern",
        "length_less_than",
        "length_greater_than",
        "email",
    ];

    /// Evaluates the rule against `value`.
    ///
    /// An absent value never satisfies any rule.
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        let Some(v) = value else {
            return false;
        };

        match *self {
            Rule::NotEmpty => !v.is_empty(),
            // Counts raw separators: runs of spaces and leading/trailing spaces all count.
            Rule::ContainsAtLeastNSpaces(n) => v.split(' ').count() - 1 >= n,
            Rule::NamePattern => NAME_RE.is_match(v),
            Rule::Alphanumeric => ALPHANUMERIC_RE.is_match(v),
            Rule::LengthLessThan(n) => v.graphemes(true).count() < n,
            Rule::LengthGreaterThan(n) => v.graphemes(true).count() > n,
            Rule::Email => EMAIL_RE.is_match(v),
        }
    }

    /// Message key of the template describing a failure of this rule.
    pub fn message_key(&self) -> &'static str {
        match self {
            Rule::NotEmpty => keys::REQUIRED,
            Rule::Alphanumeric => keys::INVALID_ALPHA,
            Rule::ContainsAtLeastNSpaces(_) => keys::CONTAIN_SPACES,
            Rule::NamePattern => keys::INCORRECT_NAME,
            Rule::LengthLessThan(_) => keys::LESS_THAN,
            Rule::LengthGreaterThan(_) => keys::GREATER_THAN,
            Rule::Email => keys::INVALID_EMAIL,
        }
    }

    /// Positional arguments for the failure template.
    ///
    /// Length bounds are reported inclusively: `LengthLessThan(5)` tells the
    /// user the maximum is 4, `LengthGreaterThan(5)` that the minimum is 6.
    pub fn message_args(&self, field_name: &str, value: &str) -> Vec<MessageArg> {
        match *self {
            Rule::NotEmpty | Rule::Alphanumeric | Rule::NamePattern => {
                vec![field_name.into()]
            }
            Rule::ContainsAtLeastNSpaces(n) => vec![field_name.into(), n.into()],
            Rule::LengthLessThan(n) => vec![field_name.into(), n.saturating_sub(1).into()],
            Rule::LengthGreaterThan(n) => vec![field_name.into(), n.saturating_add(1).into()],
            Rule::Email => vec![value.into()],
        }
    }

    /// Builds the localized failure message for a field.
    pub fn message<L: Localizer + ?Sized>(
        &self,
        localizer: &L,
        field_name: &str,
        value: &str,
    ) -> String {
        localizer.localize(self.message_key(), &self.message_args(field_name, value))
    }

    /// Snake_case name of the rule, without its parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NotEmpty => "not_empty",
            Rule::Alphanumeric => "alphanumeric",
            Rule::ContainsAtLeastNSpaces(_) => "contains_at_least_n_spaces",
            Rule::NamePattern => "name_pattern",
            Rule::LengthLessThan(_) => "length_less_than",
            Rule::LengthGreaterThan(_) => "length_greater_than",
            Rule::Email => "email",
        }
    }

    /// Numeric parameter, for rules that take one.
    pub fn parameter(&self) -> Option<usize> {
        match *self {
            Rule::ContainsAtLeastNSpaces(n)
            | Rule::LengthLessThan(n)
            | Rule::LengthGreaterThan(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parameter() {
            Some(n) => write!(f, "{}:{}", self.name(), n),
            None => f.write_str(self.name()),
        }
    }
}

/// Parses the compact form `name` or `name:n`.
///
/// # Example
///
/// ```rust
/// use formcheck_core::Rule;
///
/// let rule: Rule = "length_less_than:5".parse().unwrap();
/// assert_eq!(rule, Rule::LengthLessThan(5));
/// ```
impl FromStr for Rule {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s.trim(), None),
        };

        let numeric = |build: fn(usize) -> Rule| -> Result<Rule, FormError> {
            let raw = param.ok_or_else(|| FormError::MissingParameter(name.to_string()))?;
            raw.parse::<usize>()
                .map(build)
                .map_err(|_| FormError::invalid_parameter(name, raw))
        };

        let unit = |rule: Rule| -> Result<Rule, FormError> {
            match param {
                Some(_) => Err(FormError::UnexpectedParameter(name.to_string())),
                None => Ok(rule),
            }
        };

        match name {
            "not_empty" => unit(Rule::NotEmpty),
            "alphanumeric" => unit(Rule::Alphanumeric),
            "contains_at_least_n_spaces" => numeric(Rule::ContainsAtLeastNSpaces),
            "name_pattern" => unit(Rule::NamePattern),
            "length_less_than" => numeric(Rule::LengthLessThan),
            "length_greater_than" => numeric(Rule::LengthGreaterThan),
            "email" => unit(Rule::Email),
            other => Err(FormError::UnknownRule(other.to_string())),
        }
    }
}
