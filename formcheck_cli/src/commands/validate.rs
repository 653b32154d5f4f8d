use anyhow::{Context, Result};
use formcheck_core::{Localizer, MessageCatalog, keys};
use formcheck_parser::parse_file;
use std::path::Path;
use tracing::{debug, info};

use crate::output;

pub fn execute(
    form_path: &str,
    stop_on_first_error: bool,
    assignments: &[String],
    format: &str,
) -> Result<()> {
    info!("Validating form: {}", form_path);

    // Parse the form file
    let path = Path::new(form_path);
    let mut form =
        parse_file(path).with_context(|| format!("Failed to parse form file: {}", form_path))?;

    for assignment in assignments {
        form.apply_assignment(assignment)
            .with_context(|| format!("Failed to apply --set {}", assignment))?;
        debug!("Applied override {}", assignment);
    }

    let name = form.name.clone();
    let stop = stop_on_first_error || form.stop_on_first_error;
    debug!("Stop on first error: {}", stop);

    let validator = form.into_validator().with_stop_on_first_error(stop);
    let catalog = MessageCatalog::english();
    let outcome = validator.check(&catalog);

    output::print_validation_report(&name, &outcome, &catalog.localize(keys::OK, &[]), format);

    if !outcome.is_passed() {
        std::process::exit(1);
    }

    Ok(())
}
