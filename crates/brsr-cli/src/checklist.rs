//! # Checklist Subcommand
//!
//! Evaluates a full report file — a JSON object mapping section wire
//! names to saved payloads — and prints the per-section completion
//! checklist. Exit code 1 when any section is incomplete, matching the
//! submit gate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use brsr_core::SectionKey;
use brsr_report::report_checklist;

/// Arguments for the `brsr checklist` subcommand.
#[derive(Args, Debug)]
pub struct ChecklistArgs {
    /// Path to the report JSON file (section wire names to payloads).
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Print the checklist as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the checklist subcommand.
///
/// Returns exit code: 0 when all sections are complete, 1 otherwise.
pub fn run_checklist(args: &ChecklistArgs) -> Result<u8> {
    let raw = std::fs::read_to_string(&args.report)
        .with_context(|| format!("failed to read {}", args.report.display()))?;
    let report: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", args.report.display()))?;

    // Reconcile each section the way the wizard would before judging it.
    let reconciled: Vec<(SectionKey, serde_json::Value)> = SectionKey::ALL
        .iter()
        .map(|&section| {
            let default = brsr_schema::default_shape(section);
            let saved = report
                .get(section.as_str())
                .cloned()
                .unwrap_or(serde_json::Value::Null);
            (section, brsr_form::reconcile(&default, &saved))
        })
        .collect();

    let checklist = report_checklist(|section| {
        reconciled
            .iter()
            .find(|(key, _)| *key == section)
            .map(|(_, data)| data)
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&checklist)?);
    } else {
        for record in &checklist.sections {
            let mark = if record.is_complete { "ok " } else { "MISSING" };
            println!("{:<8} {}", mark, record.title);
            for label in &record.missing {
                println!("         - {label}");
            }
        }
        println!();
        if checklist.all_complete {
            println!("All sections complete — ready to submit.");
        } else {
            println!(
                "{} of {} sections incomplete.",
                checklist
                    .sections
                    .iter()
                    .filter(|r| !r.is_complete)
                    .count(),
                checklist.sections.len()
            );
        }
    }

    Ok(if checklist.all_complete { 0 } else { 1 })
}
