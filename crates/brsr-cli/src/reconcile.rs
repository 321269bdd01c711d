//! # Reconcile Subcommand
//!
//! Merges a saved payload file against its section's canonical shape and
//! prints the resulting working state. What the wizard does on load, but
//! offline — useful for inspecting how a legacy payload will surface in
//! the UI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use brsr_core::SectionKey;

/// Arguments for the `brsr reconcile` subcommand.
#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Section wire name (e.g. `section_a_data`).
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Path to the saved payload JSON file.
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Write the reconciled state to this file instead of stdout.
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Tag repeated rows with working-state row IDs.
    #[arg(long)]
    pub tag_rows: bool,
}

/// Execute the reconcile subcommand.
pub fn run_reconcile(args: &ReconcileArgs) -> Result<u8> {
    let section = args
        .section
        .parse::<SectionKey>()
        .with_context(|| format!("'{}' is not a BRSR section", args.section))?;

    let raw = std::fs::read_to_string(&args.payload)
        .with_context(|| format!("failed to read {}", args.payload.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", args.payload.display()))?;

    let default = brsr_schema::default_shape(section);
    let mut reconciled = brsr_form::reconcile(&default, &payload);
    if args.tag_rows {
        reconciled = brsr_form::tag_rows(&reconciled);
    }

    let rendered = serde_json::to_string_pretty(&reconciled)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "reconciled state written");
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}
