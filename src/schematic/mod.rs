//! Schematic storage, splitting and the chunk index.
//!
//! A [`PangenomeSchematic`](store::PangenomeSchematic) is split into chunk files
//! whose size is bounded by a number of matrix cells. Alongside the chunks a
//! `bin2file.json` manifest records the first bin of every chunk, so a viewer can
//! find the chunk for any bin with a binary search.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pangenome_schematic::PangenomeSchematic;
//! use pangenome_schematic::schematic::writer::write_chunks;
//! use std::path::Path;
//!
//! let mut schematic = PangenomeSchematic::load(Path::new("graph.schematic.json")).unwrap();
//! let out = Path::new("chunks");
//!
//! let entries = {
//!     let (partitions, entries) = schematic.split(1_000_000).unwrap();
//!     write_chunks(out, &partitions, 4).unwrap();
//!     entries
//! };
//! schematic.write_index_file(out, &entries).unwrap();
//! ```
//!
//! ## File names
//!
//! Chunks are named `chunk<n>_bin<bin_size>.schematic.json`. The chunk number is
//! zero-padded to `floor(log10(total_nr_files))` digits, which viewers already rely on.

pub mod encode;
pub mod index;
pub mod partition;
pub mod store;
pub mod writer;
