use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::schematic::partition::Partition;
use crate::schematic::store::SchematicError;

/// Write every chunk into `folder` using up to `threads` writer threads.
///
/// Returns the written paths in chunk order. Stops at the first failure; files
/// already written are left in place.
pub fn write_chunks(
    folder: &Path,
    partitions: &[Partition<'_>],
    threads: usize,
) -> Result<Vec<PathBuf>, SchematicError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()?;

    let paths = pool.install(|| {
        partitions
            .par_iter()
            .map(|partition| -> Result<PathBuf, SchematicError> {
                let path = folder.join(&partition.file);
                partition.save(&path)?;
                Ok(path)
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    info!(
        folder = %folder.display(),
        files = paths.len(),
        "Wrote schematic chunks"
    );
    Ok(paths)
}
