mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "Form validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the values of a form definition
    Validate {
        /// Path to the form file (YAML or TOML)
        form: String,

        /// Report only the first line of the failure message
        #[arg(long)]
        stop_on_first_error: bool,

        /// Override a field value (NAME=VALUE, repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a form definition without validating its values
    Check {
        /// Path to the form file (YAML or TOML)
        form: String,
    },

    /// Evaluate rules against a single value
    Probe {
        /// Value to test
        value: String,

        /// Rule in compact form, e.g. "not_empty" or "length_less_than:5" (repeatable)
        #[arg(short, long = "rule", required = true)]
        rules: Vec<String>,

        /// Field name used in messages
        #[arg(short, long, default_value = "Value")]
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            form,
            stop_on_first_error,
            set,
            format,
        } => commands::validate::execute(&form, stop_on_first_error, &set, &format),

        Commands::Check { form } => commands::check::execute(&form),

        Commands::Probe { value, rules, name } => commands::probe::execute(&value, &rules, &name),
    }
}
