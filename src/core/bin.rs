use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// One matrix cell: the statistics of a single path over a single bin.
///
/// Serialized as a compact four element array
/// `[coverage, inversion, first_nucleotide, last_nucleotide]` since a schematic
/// holds one of these per path per bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Fraction of the bin covered by the path
    pub coverage: f64,

    /// Fraction of the covered nucleotides traversed in reverse orientation
    pub inversion: f64,

    /// First nucleotide of the path that falls in this bin
    pub first_nucleotide: u64,

    /// Last nucleotide of the path that falls in this bin
    pub last_nucleotide: u64,
}

impl Bin {
    #[must_use]
    pub fn new(
        coverage: f64,
        inversion: f64,
        first_nucleotide: u64,
        last_nucleotide: u64,
    ) -> Self {
        Self {
            coverage,
            inversion,
            first_nucleotide,
            last_nucleotide,
        }
    }

    /// Check the value ranges of this cell, returning a message for the first bad field
    pub fn check(&self) -> Result<(), String> {
        if self.coverage.is_nan() || self.coverage < 0.0 {
            return Err(format!("coverage {} is negative or NaN", self.coverage));
        }
        if !(0.0..=1.0).contains(&self.inversion) {
            return Err(format!("inversion {} is outside [0, 1]", self.inversion));
        }
        if self.last_nucleotide < self.first_nucleotide {
            return Err(format!(
                "nucleotide span [{}, {}] is inverted",
                self.first_nucleotide, self.last_nucleotide
            ));
        }
        Ok(())
    }
}

impl Serialize for Bin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.coverage)?;
        tuple.serialize_element(&self.inversion)?;
        tuple.serialize_element(&self.first_nucleotide)?;
        tuple.serialize_element(&self.last_nucleotide)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Bin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (coverage, inversion, first_nucleotide, last_nucleotide) =
            <(f64, f64, u64, u64)>::deserialize(deserializer)?;
        let bin = Self::new(coverage, inversion, first_nucleotide, last_nucleotide);
        bin.check().map_err(D::Error::custom)?;
        Ok(bin)
    }
}

/// A bin as recorded on a single path, before it is placed into a component matrix.
///
/// Unlike [`Bin`] this keeps the global bin number and the optional consensus
/// sequence, and it serializes as a full mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathBin {
    pub bin_id: usize,
    pub coverage: f64,
    pub inversion_rate: f64,
    pub first_nucleotide: u64,
    pub last_nucleotide: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

impl PathBin {
    #[must_use]
    pub fn new(
        bin_id: usize,
        coverage: f64,
        inversion_rate: f64,
        first_nucleotide: u64,
        last_nucleotide: u64,
    ) -> Self {
        Self {
            bin_id,
            coverage,
            inversion_rate,
            first_nucleotide,
            last_nucleotide,
            sequence: None,
        }
    }

    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }
}
