//! strictform: reconcile JSON records with YAML form definitions.
//!
//! # Usage
//!
//! ```text
//! strictform populate --form <path|name> --record <record.json>
//! strictform extract  --form <path|name> --record <record.json> --submitted <values.json>
//!                     [--messages <catalog.yaml>] [--output <out.json>]
//! strictform plan     --form <path|name> --record <record.json> --submitted <values.json> [--json]
//! ```
//!
//! `--form` is a file path when it exists, otherwise a form name resolved to
//! `~/.strictform/forms/<name>.yaml`. Set `RUST_LOG` for diagnostics.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{extract::ExtractArgs, plan::PlanArgs, populate::PopulateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "strictform",
    version,
    about = "Map JSON records to form fields and back through declared accessors",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the field values read from a record.
    Populate(PopulateArgs),

    /// Write submitted field values into a record.
    Extract(ExtractArgs),

    /// Show the collection elements a submission would add and remove.
    Plan(PlanArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Populate(args) => args.run(),
        Commands::Extract(args) => args.run(),
        Commands::Plan(args) => args.run(),
    }
}

/// Diagnostics go to stderr so stdout stays machine-readable.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
