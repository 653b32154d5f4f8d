use colored::*;
use formcheck_core::ValidationOutcome;
use serde_json::json;

/// Prints the outcome of a form check the way an alert would present it:
/// the message body followed by the dismiss action.
pub fn print_validation_report(
    form: &str,
    outcome: &ValidationOutcome<'_>,
    dismiss: &str,
    format: &str,
) {
    match format {
        "json" => print_json_report(form, outcome, dismiss),
        _ => print_text_report(form, outcome, dismiss),
    }
}

fn print_text_report(form: &str, outcome: &ValidationOutcome<'_>, dismiss: &str) {
    println!("\n{}", "═".repeat(60));
    println!("{} {}", "  VALIDATION REPORT:".bold(), form.bold());
    println!("{}", "═".repeat(60));

    match outcome {
        ValidationOutcome::Passed => {
            println!("\n{} {}", "✓".green().bold(), "Form is valid".green().bold());
        }
        ValidationOutcome::Failed(failure) => {
            println!("\n{} {}", "✗".red().bold(), "Form is invalid".red().bold());

            println!();
            for line in failure.message.lines() {
                println!("  {}", line.red());
            }

            println!("\n{}", "Fields in error:".bold());
            for (i, name) in failure.field_names().iter().enumerate() {
                println!("  {}. {}", i + 1, name);
            }

            println!("\n  [ {} ]", dismiss.bold());
        }
    }

    println!("{}", "═".repeat(60));
}

fn print_json_report(form: &str, outcome: &ValidationOutcome<'_>, dismiss: &str) {
    let output = match outcome.failure() {
        None => json!({
            "form": form,
            "passed": true,
            "message": null,
            "fields_in_error": [],
            "dismiss": dismiss,
        }),
        Some(failure) => json!({
            "form": form,
            "passed": false,
            "message": failure.message,
            "fields_in_error": failure.field_names(),
            "dismiss": dismiss,
        }),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&format!("Failed to render JSON report: {}", e)),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
