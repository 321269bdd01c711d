//! # Shape Subcommand
//!
//! Prints a section's canonical default shape, or the list of known
//! section names when no section is given.

use anyhow::{Context, Result};
use clap::Args;

use brsr_core::SectionKey;

/// Arguments for the `brsr shape` subcommand.
#[derive(Args, Debug)]
pub struct ShapeArgs {
    /// Section wire name (e.g. `section_a_data`). Omit to list sections.
    #[arg(value_name = "SECTION")]
    pub section: Option<String>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the shape subcommand.
pub fn run_shape(args: &ShapeArgs) -> Result<u8> {
    let section = match &args.section {
        Some(name) => name
            .parse::<SectionKey>()
            .with_context(|| format!("'{name}' is not a BRSR section"))?,
        None => {
            for section in SectionKey::ALL {
                println!("{:<32} {}", section.as_str(), section.title());
            }
            return Ok(0);
        }
    };

    let shape = brsr_schema::default_shape(section);
    let rendered = if args.compact {
        serde_json::to_string(&shape)?
    } else {
        serde_json::to_string_pretty(&shape)?
    };
    println!("{rendered}");
    Ok(0)
}
