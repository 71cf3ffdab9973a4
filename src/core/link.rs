use serde::{Deserialize, Serialize};

/// A structural edge between two components, as drawn in the schematic.
///
/// `participants` is aligned with the schematic's `path_names`: entry `i` is true
/// when path `i` traverses this edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColumn {
    pub upstream: usize,
    pub downstream: usize,
    pub participants: Vec<bool>,
}

impl LinkColumn {
    #[must_use]
    pub fn new(upstream: usize, downstream: usize, participants: Vec<bool>) -> Self {
        Self {
            upstream,
            downstream,
            participants,
        }
    }

    /// Number of paths that traverse this edge
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.iter().filter(|&&p| p).count()
    }

    /// True when the edge jumps backwards along the bin axis
    #[must_use]
    pub fn is_backward(&self) -> bool {
        self.downstream < self.upstream
    }
}

/// A link recorded on a single path, in path-local bin numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub upstream: usize,
    pub downstream: usize,
}

impl LinkEntry {
    #[must_use]
    pub fn new(upstream: usize, downstream: usize) -> Self {
        Self {
            upstream,
            downstream,
        }
    }
}
