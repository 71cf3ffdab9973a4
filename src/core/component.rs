use serde::{Deserialize, Serialize};

use crate::core::bin::Bin;
use crate::core::link::LinkColumn;

/// A block of co-linear bins shared by all paths.
///
/// The matrix has one row per path (in `path_names` order) and one column per bin
/// in `[first_bin, last_bin]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub first_bin: usize,
    pub last_bin: usize,

    /// Whether each path has any coverage in this component
    pub occupants: Vec<bool>,

    pub matrix: Vec<Vec<Bin>>,

    /// Incoming links, most recent first
    pub arrivals: Vec<LinkColumn>,

    /// Outgoing links, in order
    pub departures: Vec<LinkColumn>,
}

impl Component {
    #[must_use]
    pub fn new(first_bin: usize, last_bin: usize) -> Self {
        Self {
            first_bin,
            last_bin,
            occupants: Vec::new(),
            matrix: Vec::new(),
            arrivals: Vec::new(),
            departures: Vec::new(),
        }
    }

    /// Number of bins (matrix columns) spanned by this component
    #[must_use]
    pub fn width(&self) -> usize {
        self.last_bin
            .checked_sub(self.first_bin)
            .map_or(0, |span| span.saturating_add(1))
    }

    /// Append one path's row, deriving its occupancy from the cells
    pub fn push_row(&mut self, row: Vec<Bin>) {
        self.occupants.push(row.iter().any(|b| b.coverage > 0.0));
        self.matrix.push(row);
    }

    /// Number of table cells this component contributes to a chunk
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.matrix.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.arrivals.len() + self.departures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_and_cells() {
        let mut component = Component::new(11, 15);
        assert_eq!(component.width(), 5);

        component.push_row(vec![Bin::new(1.0, 0.0, 1, 10); 5]);
        component.push_row(vec![Bin::new(0.0, 0.0, 0, 0); 5]);

        assert_eq!(component.occupants, vec![true, false]);
        assert_eq!(component.cell_count(), 10);
    }

    #[test]
    fn test_width_at_range_limits() {
        assert_eq!(Component::new(1, usize::MAX).width(), usize::MAX);
        assert_eq!(Component::new(5, 4).width(), 0);
    }

    #[test]
    fn test_component_field_names() {
        let component = Component::new(1, 1);
        let json = serde_json::to_value(&component).unwrap();
        for key in [
            "first_bin",
            "last_bin",
            "occupants",
            "matrix",
            "arrivals",
            "departures",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
