use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{Component, JSON_VERSION};
use crate::schematic::encode::{encode, SchematicRecord};
use crate::schematic::index::{Bin2FileIndex, IndexEntry};
use crate::utils::validation::{validate_schematic, ValidationError};

#[derive(Error, Debug)]
pub enum SchematicError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid schematic: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Schematic has no components")]
    EmptySchematic,

    #[error("cells_per_file must be at least 1")]
    InvalidCellsPerFile,

    #[error("Failed to start writer threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A pangenome graph laid out as a matrix of components by paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PangenomeSchematic {
    pub json_version: u32,

    /// Nucleotides per bin
    pub bin_size: usize,

    pub first_bin: usize,
    pub last_bin: usize,

    /// Components in bin order, tiling `[first_bin, last_bin]`
    pub components: Vec<Component>,

    /// Path names; index `i` is matrix row `i` and participant flag `i`
    pub path_names: Vec<String>,

    /// Number of chunk files, set by [`PangenomeSchematic::split`]
    pub total_nr_files: usize,
}

impl PangenomeSchematic {
    #[must_use]
    pub fn new(bin_size: usize, path_names: Vec<String>, components: Vec<Component>) -> Self {
        Self {
            json_version: JSON_VERSION,
            bin_size,
            first_bin: 0,
            last_bin: 0,
            components,
            path_names,
            total_nr_files: 0,
        }
    }

    /// Load a schematic from a JSON file
    pub fn load(path: &Path) -> Result<Self, SchematicError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a schematic from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SchematicError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the whole schematic as indented JSON
    pub fn json_dump(&self) -> Result<String, SchematicError> {
        let value = encode(SchematicRecord::Schematic(self))?;
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Check the structural invariants of the component list
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_schematic(&self.components, &self.path_names)
    }

    /// Reset the bin range to cover all components.
    ///
    /// Bins are numbered from 1 by the builder, so `first_bin` is always 1.
    pub fn update_first_last_bin(&mut self) -> Result<(), SchematicError> {
        let last = self
            .components
            .last()
            .ok_or(SchematicError::EmptySchematic)?;
        self.first_bin = 1;
        self.last_bin = last.last_bin;
        Ok(())
    }

    /// Zero-padded file number for the `nth_file` chunk
    #[must_use]
    pub fn pad_file_nr(&self, nth_file: usize) -> String {
        let width = pad_width(self.total_nr_files);
        format!("{nth_file:0width$}")
    }

    /// Name of the `nth_file` chunk, e.g. `chunk07_bin1000.schematic.json` for 250 files
    #[must_use]
    pub fn filename(&self, nth_file: usize) -> String {
        format!(
            "chunk{}_bin{}.schematic.json",
            self.pad_file_nr(nth_file),
            self.bin_size
        )
    }

    /// Write the `bin2file.json` manifest for `entries` into `folder`.
    ///
    /// Overwrites an existing manifest.
    pub fn write_index_file(
        &self,
        folder: &Path,
        entries: &[IndexEntry],
    ) -> Result<PathBuf, SchematicError> {
        Bin2FileIndex::new(self.bin_size, self.last_bin, entries.to_vec()).write_to_folder(folder)
    }

    /// Number of bins covered, 0 when there are no components
    #[must_use]
    pub fn bin_count(&self) -> usize {
        match (self.components.first(), self.components.last()) {
            (Some(first), Some(last)) => last.last_bin + 1 - first.first_bin,
            _ => 0,
        }
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.components.iter().map(Component::link_count).sum()
    }
}

/// Number of digits the chunk number is padded to.
///
/// This is `floor(log10(total_nr_files))`, so counts below ten get no padding and an
/// exact power of ten gets one digit less than its largest chunk number needs.
#[must_use]
pub fn pad_width(total_nr_files: usize) -> usize {
    if total_nr_files == 0 {
        0
    } else {
        total_nr_files.ilog10() as usize
    }
}
