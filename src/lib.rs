//! # pangenome-schematic
//!
//! A library for exporting pangenome schematics as size-bounded JSON chunks.
//!
//! A pangenome graph aligns many genomes (paths) against shared coordinate bins. The
//! schematic lays the graph out as a matrix: components of co-linear bins along one
//! axis, paths along the other, with link columns marking jumps between components.
//! Large graphs produce matrices too big for a browser to load at once, so the
//! schematic is cut into chunk files at component boundaries and a small index maps
//! bins to chunks.
//!
//! ## Example
//!
//! ```rust
//! use pangenome_schematic::{Bin, Component, PangenomeSchematic};
//!
//! let paths = vec!["hap1".to_string(), "hap2".to_string()];
//! let components = [(1, 5), (6, 10), (11, 15), (16, 20)]
//!     .into_iter()
//!     .map(|(first, last)| {
//!         let mut component = Component::new(first, last);
//!         for _ in &paths {
//!             component.push_row(vec![Bin::new(1.0, 0.0, 1, 100); last - first + 1]);
//!         }
//!         component
//!     })
//!     .collect();
//!
//! let mut schematic = PangenomeSchematic::new(100, paths, components);
//! let (partitions, entries) = schematic.split(10).unwrap();
//!
//! assert_eq!(partitions.len(), 4);
//! assert_eq!(entries[1].first_bin, 6);
//! assert_eq!(entries[1].file, "chunk1_bin100.schematic.json");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Bins, link columns, paths and components
//! - [`schematic`]: The schematic, splitting, chunk writing and the bin index
//! - [`utils`]: Structural validation
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod schematic;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{Bin, Component, LinkColumn, LinkEntry, Path, PathBin, JSON_VERSION};
pub use crate::schematic::index::{Bin2FileIndex, IndexEntry};
pub use crate::schematic::partition::Partition;
pub use crate::schematic::store::{PangenomeSchematic, SchematicError};
