use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::bin::PathBin;
use crate::core::link::LinkEntry;

/// One genome (or haplotype) traced through the graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PathData")]
pub struct Path {
    /// Path name, unique within a schematic
    pub name: String,

    /// Bins visited by this path, in path order
    bins: Vec<PathBin>,

    /// Links leaving this path's bins
    #[serde(default)]
    pub links: Vec<LinkEntry>,

    // === Derived from `bins` ===
    /// Set of bin ids in `bins`, for membership queries
    #[serde(skip)]
    bin_set: HashSet<usize>,
}

/// Stored form of a [`Path`], without the derived membership set
#[derive(Deserialize)]
struct PathData {
    name: String,
    #[serde(default)]
    bins: Vec<PathBin>,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

impl From<PathData> for Path {
    fn from(data: PathData) -> Self {
        let mut path = Path::new(data.name);
        path.links = data.links;
        path.extend(data.bins);
        path
    }
}

impl Path {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a bin, keeping the membership set current
    pub fn push_bin(&mut self, bin: PathBin) {
        self.bin_set.insert(bin.bin_id);
        self.bins.push(bin);
    }

    pub fn push_link(&mut self, upstream: usize, downstream: usize) {
        self.links.push(LinkEntry::new(upstream, downstream));
    }

    #[must_use]
    pub fn bins(&self) -> &[PathBin] {
        &self.bins
    }

    /// Rebuild the membership set from `bins`
    pub fn finalize_bins(&mut self) {
        self.bin_set = self.bins.iter().map(|b| b.bin_id).collect();
    }

    /// Check whether this path visits `bin_id`
    #[must_use]
    pub fn contains(&self, bin_id: usize) -> bool {
        self.bin_set.contains(&bin_id)
    }
}

impl Extend<PathBin> for Path {
    fn extend<T: IntoIterator<Item = PathBin>>(&mut self, iter: T) {
        for bin in iter {
            self.push_bin(bin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_tracks_appends() {
        let mut path = Path::new("HG002#1");
        assert!(!path.contains(1));

        path.push_bin(PathBin::new(1, 1.0, 0.0, 1, 10));
        path.extend([
            PathBin::new(2, 1.0, 0.0, 11, 20),
            PathBin::new(5, 0.5, 1.0, 21, 25),
        ]);

        assert!(path.contains(1));
        assert!(path.contains(5));
        assert!(!path.contains(3));
        assert_eq!(path.bins().len(), 3);
    }

    #[test]
    fn test_membership_after_deserialize() {
        let json = r#"{
            "name": "chm13",
            "bins": [
                {"bin_id": 4, "coverage": 1.0, "inversion_rate": 0.0,
                 "first_nucleotide": 31, "last_nucleotide": 40}
            ],
            "links": [{"upstream": 4, "downstream": 9}]
        }"#;
        let mut path: Path = serde_json::from_str(json).unwrap();
        assert!(path.contains(4));
        assert!(!path.contains(9));
        assert_eq!(path.links, vec![LinkEntry::new(4, 9)]);

        path.finalize_bins();
        assert!(path.contains(4));
    }
}
