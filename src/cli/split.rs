use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::schematic::store::PangenomeSchematic;
use crate::schematic::writer::write_chunks;

#[derive(Args)]
pub struct SplitArgs {
    /// Full schematic JSON produced by the graph builder
    #[arg(required = true)]
    pub input: PathBuf,

    /// Directory for the chunk files and bin2file.json (created if missing)
    #[arg(short, long, required = true)]
    pub out_dir: PathBuf,

    /// Target matrix cells (bins x paths) per chunk file
    #[arg(short, long, default_value = "1000000", value_parser = clap::value_parser!(u64).range(1..))]
    pub cells_per_file: u64,

    /// Number of threads used to write chunk files
    #[arg(short, long, default_value = "1")]
    pub threads: usize,
}

/// Execute split subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, is not a valid schematic, or any
/// output file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SplitArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut schematic = PangenomeSchematic::load(&args.input)
        .with_context(|| format!("Failed to load schematic {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} components, {} paths, {} bins of {} bp",
            schematic.components.len(),
            schematic.path_names.len(),
            schematic.bin_count(),
            schematic.bin_size
        );
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let cells_per_file = usize::try_from(args.cells_per_file)?;
    let (entries, written) = {
        let (partitions, entries) = schematic.split(cells_per_file)?;
        let written = write_chunks(&args.out_dir, &partitions, args.threads)?;
        (entries, written)
    };
    let index_path = schematic.write_index_file(&args.out_dir, &entries)?;

    match format {
        OutputFormat::Text => {
            println!(
                "Wrote {} chunk files (bins 1-{}) to {}",
                written.len(),
                schematic.last_bin,
                args.out_dir.display()
            );
            if verbose {
                for entry in &entries {
                    println!("  {:>10}  {}", entry.first_bin, entry.file);
                }
            }
            println!("Index: {}", index_path.display());
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.input.display().to_string(),
                "out_dir": args.out_dir.display().to_string(),
                "last_bin": schematic.last_bin,
                "total_nr_files": schematic.total_nr_files,
                "index": index_path.display().to_string(),
                "files": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
