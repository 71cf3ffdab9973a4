//! The closed set of records that make up schematic output.
//!
//! Every record kind written to disk is a variant of [`SchematicRecord`]; anything
//! else cannot be encoded. A [`Bin`] encodes as a four element array, every other
//! record as a mapping of its fields.

use serde::{Serialize, Serializer};

use crate::core::{Bin, Component, LinkColumn, Path, PathBin};
use crate::schematic::partition::Partition;
use crate::schematic::store::{PangenomeSchematic, SchematicError};

#[derive(Debug, Clone, Copy)]
pub enum SchematicRecord<'a> {
    Bin(&'a Bin),
    PathBin(&'a PathBin),
    LinkColumn(&'a LinkColumn),
    Component(&'a Component),
    Path(&'a Path),
    Schematic(&'a PangenomeSchematic),
    Partition(&'a Partition<'a>),
}

impl Serialize for SchematicRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bin(bin) => bin.serialize(serializer),
            Self::PathBin(bin) => bin.serialize(serializer),
            Self::LinkColumn(link) => link.serialize(serializer),
            Self::Component(component) => component.serialize(serializer),
            Self::Path(path) => path.serialize(serializer),
            Self::Schematic(schematic) => schematic.serialize(serializer),
            Self::Partition(partition) => partition.serialize(serializer),
        }
    }
}

/// Encode a record as a JSON value
pub fn encode(record: SchematicRecord<'_>) -> Result<serde_json::Value, SchematicError> {
    Ok(serde_json::to_value(record)?)
}
