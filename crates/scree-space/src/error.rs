//! Error types for grid and graph operations.

use crate::graph::VertexId;
use crate::pos::Pos;
use std::error::Error;
use std::fmt;

/// Errors arising from grid or graph construction and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A position is outside the bounds of the grid.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Grid construction from rows of unequal width.
    RaggedRows {
        /// Index of the first row with a mismatched width.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },
    /// Attempted to construct a grid or graph with zero cells.
    EmptySpace,
    /// A vertex id that is not registered in the graph.
    UnknownVertex {
        /// The unrecognised vertex.
        vertex: VertexId,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} out of bounds: {bounds}")
            }
            Self::RaggedRows { row, expected, got } => {
                write!(
                    f,
                    "ragged rows: row {row} has width {got}, expected {expected}"
                )
            }
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::UnknownVertex { vertex } => write!(f, "unknown vertex: {vertex}"),
        }
    }
}

impl Error for SpaceError {}
