//! Command-line interface for pangenome-schematic.
//!
//! - **split**: split a full schematic into chunk files plus `bin2file.json`
//! - **info**: summarize a schematic or chunk file
//! - **locate**: find the chunk file that holds a bin
//!
//! ## Usage
//!
//! ```text
//! # Split into chunks of about one million matrix cells, writing with 4 threads
//! pangenome-schematic split graph.schematic.json --out-dir chunks --cells-per-file 1000000 -t 4
//!
//! # Which chunk holds bin 52311?
//! pangenome-schematic locate chunks/bin2file.json 52311
//! ```

use clap::{Parser, Subcommand};

pub mod info;
pub mod locate;
pub mod split;

#[derive(Parser)]
#[command(name = "pangenome-schematic")]
#[command(version)]
#[command(about = "Split pangenome schematics into chunk files for visualization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a schematic into size-bounded chunk files
    Split(split::SplitArgs),

    /// Show a summary of a schematic file
    Info(info::InfoArgs),

    /// Find the chunk file holding a bin
    Locate(locate::LocateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
