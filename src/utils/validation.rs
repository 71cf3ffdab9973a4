//! Structural checks on a schematic before it is split.

use std::collections::HashSet;

use crate::core::{Component, LinkColumn};

/// A broken schematic invariant, naming the first offending component
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Schematic has no components")]
    NoComponents,

    #[error("Schematic has no paths")]
    NoPaths,

    #[error("Duplicate path name '{0}'")]
    DuplicatePathName(String),

    #[error("Component {index} starts at bin 0; bins are numbered from 1")]
    ZeroBin { index: usize },

    #[error("Schematic starts at bin {found}; the first component must start at bin 1")]
    FirstBinNotOne { found: usize },

    #[error("Component {index} ends at bin {last_bin}, past the largest usable bin")]
    BinOverflow { index: usize, last_bin: usize },

    #[error("Component {index} has first_bin {first_bin} after last_bin {last_bin}")]
    InvertedRange {
        index: usize,
        first_bin: usize,
        last_bin: usize,
    },

    #[error("Component {index} starts at bin {found}, expected {expected}")]
    NotContiguous {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Component {index} has {found} occupant flags for {expected} paths")]
    OccupantCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Component {index} has {found} matrix rows for {expected} paths")]
    RowCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Component {index} row {row} has {found} bins, expected {expected}")]
    RowWidth {
        index: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Component {index} row {row} column {column}: {message}")]
    InvalidBin {
        index: usize,
        row: usize,
        column: usize,
        message: String,
    },

    #[error("Component {index} {direction} link {link} has {found} participants for {expected} paths")]
    ParticipantCount {
        index: usize,
        direction: &'static str,
        link: usize,
        expected: usize,
        found: usize,
    },
}

/// Check that `components` tile the bin axis and are shaped for `path_names`.
///
/// # Errors
///
/// Returns the first violation found, scanning components in order.
pub fn validate_schematic(
    components: &[Component],
    path_names: &[String],
) -> Result<(), ValidationError> {
    if components.is_empty() {
        return Err(ValidationError::NoComponents);
    }
    if path_names.is_empty() {
        return Err(ValidationError::NoPaths);
    }

    let mut seen = HashSet::new();
    for name in path_names {
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::DuplicatePathName(name.clone()));
        }
    }

    let mut expected_first = None;
    for (index, component) in components.iter().enumerate() {
        if component.first_bin == 0 {
            return Err(ValidationError::ZeroBin { index });
        }
        if component.first_bin > component.last_bin {
            return Err(ValidationError::InvertedRange {
                index,
                first_bin: component.first_bin,
                last_bin: component.last_bin,
            });
        }
        if index == 0 && component.first_bin != 1 {
            return Err(ValidationError::FirstBinNotOne {
                found: component.first_bin,
            });
        }
        if let Some(expected) = expected_first {
            if component.first_bin != expected {
                return Err(ValidationError::NotContiguous {
                    index,
                    expected,
                    found: component.first_bin,
                });
            }
        }
        let next = component
            .last_bin
            .checked_add(1)
            .ok_or(ValidationError::BinOverflow {
                index,
                last_bin: component.last_bin,
            })?;
        expected_first = Some(next);

        validate_component(index, component, path_names.len())?;
    }

    Ok(())
}

fn validate_component(
    index: usize,
    component: &Component,
    path_count: usize,
) -> Result<(), ValidationError> {
    if component.occupants.len() != path_count {
        return Err(ValidationError::OccupantCount {
            index,
            expected: path_count,
            found: component.occupants.len(),
        });
    }
    if component.matrix.len() != path_count {
        return Err(ValidationError::RowCount {
            index,
            expected: path_count,
            found: component.matrix.len(),
        });
    }

    let width = component.width();
    for (row, bins) in component.matrix.iter().enumerate() {
        if bins.len() != width {
            return Err(ValidationError::RowWidth {
                index,
                row,
                expected: width,
                found: bins.len(),
            });
        }
        for (column, bin) in bins.iter().enumerate() {
            bin.check().map_err(|message| ValidationError::InvalidBin {
                index,
                row,
                column,
                message,
            })?;
        }
    }

    check_participants(index, "arrival", &component.arrivals, path_count)?;
    check_participants(index, "departure", &component.departures, path_count)
}

fn check_participants(
    index: usize,
    direction: &'static str,
    links: &[LinkColumn],
    path_count: usize,
) -> Result<(), ValidationError> {
    for (link, column) in links.iter().enumerate() {
        if column.participants.len() != path_count {
            return Err(ValidationError::ParticipantCount {
                index,
                direction,
                link,
                expected: path_count,
                found: column.participants.len(),
            });
        }
    }
    Ok(())
}
