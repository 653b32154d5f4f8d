use anyhow::{Context, Result};
use colored::*;
use formcheck_core::{MessageCatalog, Rule};
use tracing::info;

pub fn execute(value: &str, raw_rules: &[String], name: &str) -> Result<()> {
    info!("Probing {} rule(s) against {:?}", raw_rules.len(), value);

    let rules = raw_rules
        .iter()
        .map(|raw| {
            raw.parse::<Rule>().with_context(|| {
                format!(
                    "Invalid rule '{}' (known rules: {})",
                    raw,
                    Rule::NAMES.join(", ")
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let catalog = MessageCatalog::english();
    let mut failures = 0;

    for rule in &rules {
        if rule.is_valid(Some(value)) {
            println!("{} {}", "✓".green().bold(), rule);
        } else {
            failures += 1;
            let message = rule.message(&catalog, name, value);
            println!("{} {}: {}", "✗".red().bold(), rule, message.as_str().red());
        }
    }

    if failures > 0 {
        println!("\n{} of {} rule(s) failed", failures, rules.len());
        std::process::exit(1);
    }

    Ok(())
}
