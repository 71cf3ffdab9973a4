//! Splitting a schematic into chunk files of bounded size.
//!
//! The budget is given in matrix cells (bins x paths) and converted to a number of
//! bins per file. Chunks are cut only at component boundaries, so a chunk can run
//! over budget when a component is wider than the budget, but never comes out empty.

use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::{Component, JSON_VERSION};
use crate::schematic::encode::SchematicRecord;
use crate::schematic::index::IndexEntry;
use crate::schematic::store::{PangenomeSchematic, SchematicError};

/// One chunk of a split schematic.
///
/// Serializes with the same fields as [`PangenomeSchematic`], so a chunk file can be
/// loaded back as a schematic of its own. Components and path names are borrowed
/// from the schematic that was split.
#[derive(Debug, Clone, Serialize)]
pub struct Partition<'a> {
    pub json_version: u32,
    pub bin_size: usize,
    pub first_bin: usize,
    pub last_bin: usize,
    pub components: &'a [Component],
    pub path_names: &'a [String],
    pub total_nr_files: usize,

    /// File name this chunk is written to
    #[serde(skip)]
    pub file: String,
}

impl Partition<'_> {
    /// Write this chunk as indented JSON to `path`
    pub fn save(&self, path: &Path) -> Result<(), SchematicError> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &SchematicRecord::Partition(self))?;
        writer.flush()?;
        Ok(())
    }
}

/// Bins per file for a budget of `cells_per_file` matrix cells
#[must_use]
pub fn bins_per_file(cells_per_file: usize, path_count: usize) -> usize {
    cells_per_file.div_ceil(path_count)
}

/// Component indices at which the schematic is cut.
///
/// `borders` holds each component's `last_bin` in order. For every budget step
/// starting at bin `0, b, 2b, ...` below `last_bin`, the cut is the first component
/// ending past `start + b`. A cut never falls behind the previous step's cut plus
/// one, and a cut that does not advance past the last emitted one is dropped.
///
/// The result starts at 0 and ends at `borders.len()`, strictly increasing, so
/// consecutive pairs are non-empty component ranges covering every component.
#[must_use]
pub fn cut_points(borders: &[usize], last_bin: usize, bins_per_file: usize) -> Vec<usize> {
    let mut cuts = vec![0];
    let mut prev_cut = 0;

    for start_bin in (0..last_bin).step_by(bins_per_file) {
        let cut = borders.partition_point(|&border| border <= start_bin + bins_per_file);
        let point = cut.max(prev_cut + 1);
        if cuts.last().map_or(true, |&last| point > last) {
            cuts.push(point);
        }
        prev_cut = cut;
    }

    cuts
}

impl PangenomeSchematic {
    /// Split into chunks of roughly `cells_per_file` matrix cells each.
    ///
    /// Updates `first_bin`, `last_bin` and `total_nr_files`, then returns the chunks
    /// together with their index entries, both in file order.
    pub fn split(
        &mut self,
        cells_per_file: usize,
    ) -> Result<(Vec<Partition<'_>>, Vec<IndexEntry>), SchematicError> {
        if cells_per_file == 0 {
            return Err(SchematicError::InvalidCellsPerFile);
        }
        self.validate()?;

        let bins_per_file = bins_per_file(cells_per_file, self.path_names.len());
        self.update_first_last_bin()?;
        self.total_nr_files = self.last_bin.div_ceil(bins_per_file);

        let borders: Vec<usize> = self.components.iter().map(|c| c.last_bin).collect();
        let cuts = cut_points(&borders, self.last_bin, bins_per_file);
        debug!(
            bins_per_file,
            total_nr_files = self.total_nr_files,
            cuts = cuts.len(),
            "Computed cut points"
        );

        let partition_count = cuts.len() - 1;
        if partition_count != self.total_nr_files {
            warn!(
                partitions = partition_count,
                total_nr_files = self.total_nr_files,
                "Components wider than {bins_per_file} bins were merged into fewer chunks"
            );
        }

        let schematic: &Self = self;
        let mut partitions = Vec::with_capacity(partition_count);
        let mut entries = Vec::with_capacity(partition_count);

        for (i, range) in cuts.windows(2).enumerate() {
            // cut points strictly increase, so every slice is non-empty
            let components = &schematic.components[range[0]..range[1]];
            let first_bin = components[0].first_bin;
            let last_bin = components[components.len() - 1].last_bin;
            let file = schematic.filename(i);

            debug!(
                file = %file,
                first_bin,
                last_bin,
                components = components.len(),
                "Partition"
            );

            entries.push(IndexEntry::new(first_bin, file.clone()));
            partitions.push(Partition {
                json_version: JSON_VERSION,
                bin_size: schematic.bin_size,
                first_bin,
                last_bin,
                components,
                path_names: &schematic.path_names,
                total_nr_files: schematic.total_nr_files,
                file,
            });
        }

        Ok((partitions, entries))
    }
}
