//! # Formcheck Core
//!
//! Core building blocks for validating user-entered form values.
//!
//! A form is a list of named fields. Each field carries a string value and an
//! ordered list of rules. Checking a form evaluates every rule of every field
//! and produces either a pass or a failure report made of localized messages
//! plus the fields that are in error. Presentation (alerts, dialogs, terminal
//! output) is left to the caller.
//!
//! ## Key Concepts
//!
//! - **Rule**: a single predicate over a string value with a message template
//! - **Field**: a display name, a value and the rules that apply to it
//! - **FormValidator**: an ordered collection of fields checked together
//! - **Localizer**: the injected lookup turning message keys into display text
//!
//! ## Example
//!
//! ```rust
//! use formcheck_core::{FieldBuilder, FormValidator, MessageCatalog, Rule, ValidationOutcome};
//!
//! let validator = FormValidator::new(vec![
//!     FieldBuilder::new("Username", "jdoe")
//!         .rule(Rule::NotEmpty)
//!         .rule(Rule::Alphanumeric)
//!         .build(),
//!     FieldBuilder::new("Email", "not-an-email")
//!         .rule(Rule::Email)
//!         .build(),
//! ]);
//!
//! let catalog = MessageCatalog::english();
//! match validator.check(&catalog) {
//!     ValidationOutcome::Passed => println!("all good"),
//!     ValidationOutcome::Failed(failure) => {
//!         assert_eq!(failure.fields_in_error.len(), 1);
//!         assert_eq!(failure.message, "not-an-email is not a valid email address.");
//!     }
//! }
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod form;
pub mod localize;
pub mod rule;
pub mod validator;

pub use builder::*;
pub use error::*;
pub use field::*;
pub use form::*;
pub use localize::*;
pub use rule::*;
pub use validator::*;
