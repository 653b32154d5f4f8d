use anyhow::{Context, Result};
use formcheck_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(form_path: &str) -> Result<()> {
    info!("Checking form definition: {}", form_path);

    // Parse the form file
    let path = Path::new(form_path);
    let form =
        parse_file(path).with_context(|| format!("Failed to parse form file: {}", form_path))?;

    output::print_info(&format!(
        "Form loaded: {} ({} fields)",
        form.name,
        form.fields.len()
    ));

    // Parsed successfully means every rule is well-formed
    output::print_success("Form definition is valid");

    println!("\nForm Summary:");
    println!("  Name:        {}", form.name);
    println!(
        "  Description: {}",
        form.description.as_deref().unwrap_or("N/A")
    );
    println!("  Stop on first error: {}", form.stop_on_first_error);

    if !form.fields.is_empty() {
        println!("\nFields:");
        for field in &form.fields {
            let rules: Vec<String> = field.rules.iter().map(|r| r.to_string()).collect();
            println!(
                "  - {} ({}): {}",
                field.display_name,
                if field.required { "required" } else { "optional" },
                if rules.is_empty() {
                    "no rules".to_string()
                } else {
                    rules.join(", ")
                }
            );
            if let Some(message) = &field.override_message {
                println!("      message: {}", message);
            }
        }
    }

    Ok(())
}
