//! End-to-end checks of a realistic signup form.
//!
//! The form mixes required and optional fields, parameterized rules and an
//! override message, and is checked the way a client would: boolean check
//! first, then the full report once the user submits.

use formcheck_core::{
    FieldBuilder, Form, FormBuilder, FormValidator, MessageArg, MessageCatalog, Rule,
    ValidationOutcome, keys,
};
use pretty_assertions::assert_eq;

/// Creates the signup form with every value filled in correctly.
fn create_signup_form() -> Form {
    FormBuilder::new("signup")
        .description("Account creation")
        .field(
            FieldBuilder::new("Full name", "Ada Lovelace")
                .rule(Rule::NotEmpty)
                .rule(Rule::NamePattern)
                .rule(Rule::ContainsAtLeastNSpaces(1))
                .build(),
        )
        .field(
            FieldBuilder::new("Username", "ada1815")
                .rule(Rule::NotEmpty)
                .rule(Rule::Alphanumeric)
                .rule(Rule::LengthGreaterThan(3))
                .rule(Rule::LengthLessThan(17))
                .build(),
        )
        .field(
            FieldBuilder::new("Email", "ada@analytical.org")
                .rule(Rule::NotEmpty)
                .rule(Rule::Email)
                .build(),
        )
        .field(
            FieldBuilder::new("Referral code", "")
                .required(false)
                .rule(Rule::Alphanumeric)
                .rule(Rule::LengthLessThan(9))
                .override_message("Referral codes are up to 8 letters or digits.")
                .build(),
        )
        .build()
}

#[test]
fn test_valid_signup_form() {
    let validator = create_signup_form().into_validator();

    assert!(validator.is_valid());
    assert_eq!(
        validator.check(&MessageCatalog::english()),
        ValidationOutcome::Passed
    );
}

#[test]
fn test_every_invalid_field_is_reported() {
    let mut form = create_signup_form();
    form.set_value("Full name", "Ada").unwrap();
    form.set_value("Username", "a!").unwrap();
    form.set_value("Referral code", "not a code").unwrap();

    let validator = form.into_validator();
    assert!(!validator.is_valid());

    let outcome = validator.check(&MessageCatalog::english());
    let failure = outcome.failure().expect("form should fail");

    assert_eq!(
        failure.field_names(),
        vec!["Full name", "Username", "Referral code"]
    );
    assert_eq!(
        failure.message,
        "Full name must contain at least 1 space(s).\n\
         Username must contain only letters and digits.\n\
         Username must be at least 4 characters long.\n\
         Referral codes are up to 8 letters or digits."
    );
}

#[test]
fn test_stop_on_first_error_truncates_at_first_line() {
    let mut form = create_signup_form();
    form.stop_on_first_error = true;
    form.set_value("Username", "a!").unwrap();
    form.set_value("Email", "ada").unwrap();

    let validator = form.into_validator();
    let outcome = validator.check(&MessageCatalog::english());
    let failure = outcome.failure().unwrap();

    // Username breaks two rules; only the first line survives.
    assert_eq!(failure.message, "Username must contain only letters and digits.");
    assert_eq!(failure.field_names(), vec!["Username", "Email"]);
}

#[test]
fn test_email_message_echoes_value() {
    let mut form = create_signup_form();
    form.set_value("Email", "ada@engine").unwrap();

    let validator = form.into_validator();
    let outcome = validator.check(&MessageCatalog::english());

    assert_eq!(
        outcome.failure().unwrap().message,
        "ada@engine is not a valid email address."
    );
}

#[test]
fn test_translated_catalog() {
    let catalog = MessageCatalog::english()
        .with(keys::REQUIRED, "Le champ {0} est obligatoire.")
        .with(keys::LESS_THAN, "{0} : {1} caractères maximum.");

    let validator = FormValidator::new(vec![
        FieldBuilder::new("Nom", "").rule(Rule::NotEmpty).build(),
        FieldBuilder::new("Ville", "Saint-Rémy-de-Provence")
            .rule(Rule::LengthLessThan(11))
            .build(),
    ]);

    let outcome = validator.check(&catalog);
    assert_eq!(
        outcome.failure().unwrap().message,
        "Le champ Nom est obligatoire.\nVille : 10 caractères maximum."
    );
}

#[test]
fn test_missing_translation_falls_back_to_key() {
    let validator = FormValidator::new(vec![
        FieldBuilder::new("Name", "").rule(Rule::NotEmpty).build(),
    ]);

    let outcome = validator.check(&MessageCatalog::new());
    assert_eq!(outcome.failure().unwrap().message, "error.required");
}

#[test]
fn test_closure_localizer_sees_keys_and_args() {
    let validator = FormValidator::new(vec![
        FieldBuilder::new("Code", "abcdef")
            .rule(Rule::LengthLessThan(5))
            .build(),
    ]);

    let localizer = |key: &str, args: &[MessageArg]| {
        let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        format!("{}({})", key, rendered.join(","))
    };

    let outcome = validator.check(&localizer);
    assert_eq!(outcome.failure().unwrap().message, "error.less_than(Code,4)");
}
