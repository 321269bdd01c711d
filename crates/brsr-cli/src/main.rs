//! # brsr CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brsr_cli::checklist::{run_checklist, ChecklistArgs};
use brsr_cli::reconcile::{run_reconcile, ReconcileArgs};
use brsr_cli::shape::{run_shape, ShapeArgs};

/// BRSR Disclosure Stack CLI
///
/// Offline tooling for BRSR disclosure payloads: canonical shape
/// inspection, reconciliation of saved payloads, and completion
/// checklist runs.
#[derive(Parser, Debug)]
#[command(name = "brsr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a section's canonical default shape.
    Shape(ShapeArgs),

    /// Reconcile a saved payload file against its canonical shape.
    Reconcile(ReconcileArgs),

    /// Evaluate a report file and print the completion checklist.
    Checklist(ChecklistArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Shape(args) => run_shape(&args),
        Commands::Reconcile(args) => run_reconcile(&args),
        Commands::Checklist(args) => run_checklist(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
