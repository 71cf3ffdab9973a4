//! Data model of a pangenome schematic.
//!
//! - [`Bin`]: one matrix cell (coverage, inversion, nucleotide span)
//! - [`PathBin`]: a bin as recorded on a path, with its id and optional sequence
//! - [`LinkColumn`], [`LinkEntry`]: structural edges between components
//! - [`Path`]: one genome traced through the graph
//! - [`Component`]: a block of bins shared by all paths
//!
//! Components are tiled left to right along the bin axis. Bins are numbered
//! globally starting at 1, so a schematic of `n` bins covers `[1, n]`.

pub mod bin;
pub mod component;
pub mod link;
pub mod path;

pub use bin::{Bin, PathBin};
pub use component::Component;
pub use link::{LinkColumn, LinkEntry};
pub use path::Path;

/// Format version stamped into every chunk and index file
pub const JSON_VERSION: u32 = 14;
