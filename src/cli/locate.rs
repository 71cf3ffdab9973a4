use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::schematic::index::Bin2FileIndex;

#[derive(Args)]
pub struct LocateArgs {
    /// bin2file.json manifest written by `split`
    #[arg(required = true)]
    pub index: PathBuf,

    /// Bin number to look up (1-based)
    #[arg(required = true)]
    pub bin: usize,
}

/// Execute locate subcommand
///
/// # Errors
///
/// Returns an error if the index cannot be loaded or no chunk holds the bin.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LocateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let index = Bin2FileIndex::load(&args.index)
        .with_context(|| format!("Failed to load index {}", args.index.display()))?;

    if verbose {
        eprintln!(
            "Loaded index with {} files covering bins 1-{}",
            index.len(),
            index.last_bin
        );
    }

    let entry = index.file_for_bin(args.bin).ok_or_else(|| {
        anyhow::anyhow!(
            "Bin {} is outside the indexed range 1-{}",
            args.bin,
            index.last_bin
        )
    })?;

    // chunk paths are relative to the manifest
    let path = args
        .index
        .parent()
        .map_or_else(|| PathBuf::from(&entry.file), |dir| dir.join(&entry.file));

    match format {
        OutputFormat::Text => println!("{}", path.display()),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "bin": args.bin,
                "first_bin": entry.first_bin,
                "file": entry.file,
                "path": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
