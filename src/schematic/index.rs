use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::JSON_VERSION;

use super::store::SchematicError;

/// File name of the chunk manifest within an output folder
pub const INDEX_FILENAME: &str = "bin2file.json";

/// Where one chunk file starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub first_bin: usize,
    pub file: String,
}

impl IndexEntry {
    pub fn new(first_bin: usize, file: impl Into<String>) -> Self {
        Self {
            first_bin,
            file: file.into(),
        }
    }
}

/// The `bin2file.json` manifest: chunk files in bin order.
///
/// A chunk covers bins from its own `first_bin` up to the next chunk's `first_bin`
/// (or `last_bin` for the final chunk).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin2FileIndex {
    pub bin_size: usize,
    pub json_version: u32,
    pub last_bin: usize,
    pub files: Vec<IndexEntry>,
}

impl Bin2FileIndex {
    #[must_use]
    pub fn new(bin_size: usize, last_bin: usize, files: Vec<IndexEntry>) -> Self {
        Self {
            bin_size,
            json_version: JSON_VERSION,
            last_bin,
            files,
        }
    }

    pub fn load(path: &Path) -> Result<Self, SchematicError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize with four space indentation
    pub fn to_json(&self) -> Result<String, SchematicError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the manifest to `folder/bin2file.json`, replacing any existing one
    pub fn write_to_folder(&self, folder: &Path) -> Result<PathBuf, SchematicError> {
        let path = folder.join(INDEX_FILENAME);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(self.to_json()?.as_bytes())?;
        info!(path = %path.display(), files = self.files.len(), "Saved bin to file mapping");
        Ok(path)
    }

    /// Find the chunk holding `bin`.
    ///
    /// Returns `None` for bin 0, bins past `last_bin`, or bins before the first chunk.
    #[must_use]
    pub fn file_for_bin(&self, bin: usize) -> Option<&IndexEntry> {
        if bin == 0 || bin > self.last_bin {
            return None;
        }
        let idx = self.files.partition_point(|entry| entry.first_bin <= bin);
        idx.checked_sub(1).map(|i| &self.files[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_index() -> Bin2FileIndex {
        Bin2FileIndex::new(
            1000,
            20,
            vec![
                IndexEntry::new(1, "chunk0_bin1000.schematic.json"),
                IndexEntry::new(6, "chunk1_bin1000.schematic.json"),
                IndexEntry::new(16, "chunk2_bin1000.schematic.json"),
            ],
        )
    }

    #[test]
    fn test_file_for_bin() {
        let index = make_index();
        assert_eq!(index.file_for_bin(1).unwrap().first_bin, 1);
        assert_eq!(index.file_for_bin(5).unwrap().first_bin, 1);
        assert_eq!(index.file_for_bin(6).unwrap().first_bin, 6);
        assert_eq!(index.file_for_bin(15).unwrap().first_bin, 6);
        assert_eq!(
            index.file_for_bin(20).unwrap().file,
            "chunk2_bin1000.schematic.json"
        );
    }

    #[test]
    fn test_file_for_bin_out_of_range() {
        let index = make_index();
        assert!(index.file_for_bin(0).is_none());
        assert!(index.file_for_bin(21).is_none());

        let empty = Bin2FileIndex::new(1000, 20, vec![]);
        assert!(empty.file_for_bin(3).is_none());
    }

    #[test]
    fn test_manifest_layout() {
        let json = make_index().to_json().unwrap();
        assert!(json.starts_with("{\n    \"bin_size\": 1000,\n    \"json_version\""));
        assert!(json.contains("\"last_bin\": 20"));
        assert!(json.contains("\"file\": \"chunk1_bin1000.schematic.json\""));
    }

    #[test]
    fn test_write_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let index = make_index();

        let path = index.write_to_folder(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(INDEX_FILENAME));
        assert_eq!(Bin2FileIndex::load(&path).unwrap(), index);

        // a second write replaces the first
        let smaller = Bin2FileIndex::new(1000, 5, vec![IndexEntry::new(1, "chunk0.json")]);
        smaller.write_to_folder(dir.path()).unwrap();
        assert_eq!(Bin2FileIndex::load(&path).unwrap(), smaller);
    }

    #[test]
    fn test_write_to_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does/not/exist");
        assert!(matches!(
            make_index().write_to_folder(&missing),
            Err(SchematicError::IoError(_))
        ));
    }
}
