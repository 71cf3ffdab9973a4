use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::schematic::store::PangenomeSchematic;

#[derive(Args)]
pub struct InfoArgs {
    /// Schematic or chunk JSON file
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute info subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InfoArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let schematic = PangenomeSchematic::load(&args.input)
        .with_context(|| format!("Failed to load schematic {}", args.input.display()))?;

    let first_bin = schematic.components.first().map_or(0, |c| c.first_bin);
    let last_bin = schematic.components.last().map_or(0, |c| c.last_bin);
    let cells: usize = schematic.components.iter().map(|c| c.cell_count()).sum();
    let links: Vec<_> = schematic
        .components
        .iter()
        .flat_map(|c| c.arrivals.iter().chain(&c.departures))
        .collect();
    let backward_links = links.iter().filter(|link| link.is_backward()).count();
    let link_traversals: usize = links.iter().map(|link| link.participant_count()).sum();
    let valid = schematic.validate();

    match format {
        OutputFormat::Text => {
            println!("Schematic: {}", args.input.display());
            println!("  JSON version:  {}", schematic.json_version);
            println!("  Bin size:      {} bp", schematic.bin_size);
            println!("  Bins:          {first_bin}-{last_bin}");
            println!("  Components:    {}", schematic.components.len());
            println!("  Paths:         {}", schematic.path_names.len());
            println!("  Link columns:  {}", schematic.link_count());
            println!("  Backward:      {backward_links}");
            println!("  Traversals:    {link_traversals}");
            println!("  Matrix cells:  {cells}");
            match &valid {
                Ok(()) => println!("  Valid:         yes"),
                Err(e) => println!("  Valid:         no ({e})"),
            }
            if verbose {
                println!("\nPaths:");
                for name in &schematic.path_names {
                    println!("  {name}");
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.input.display().to_string(),
                "json_version": schematic.json_version,
                "bin_size": schematic.bin_size,
                "first_bin": first_bin,
                "last_bin": last_bin,
                "components": schematic.components.len(),
                "paths": schematic.path_names,
                "link_columns": schematic.link_count(),
                "backward_links": backward_links,
                "link_traversals": link_traversals,
                "matrix_cells": cells,
                "valid": valid.is_ok(),
                "error": valid.err().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
