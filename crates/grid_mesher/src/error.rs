//! Error types for grid construction and mesh verification.

use thiserror::Error;

/// Rejected grid input. Raised before any scanning happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("malformed grid: row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid material id {value} at ({row}, {col})")]
    InvalidMaterialId { row: usize, col: usize, value: i64 },

    #[error("cannot reshape {len} cells into rows of width {width}")]
    ReshapeLength { len: usize, width: usize },

    #[error("row width must be non-zero")]
    ZeroWidth,

    #[error("grid of {rows}x{cols} exceeds u32 coordinates")]
    TooLarge { rows: usize, cols: usize },
}

/// A violated mesh invariant, reported by [`crate::verify::verify_mesh`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshDefect {
    #[error("rectangle {index} has inverted corners")]
    InvertedCorners { index: usize },

    #[error("rectangle {index} extends outside the {rows}x{cols} grid")]
    OutOfBounds {
        index: usize,
        rows: usize,
        cols: usize,
    },

    #[error("rectangle {index} covers empty cell ({row}, {col})")]
    CoversEmpty { index: usize, row: u32, col: u32 },

    #[error("cell ({row}, {col}) covered by rectangles {first} and {second}")]
    Overlap {
        row: u32,
        col: u32,
        first: usize,
        second: usize,
    },

    #[error("occupied cell ({row}, {col}) is not covered")]
    Uncovered { row: u32, col: u32 },

    #[error("rectangle {index} mixes materials {expected} and {found}")]
    MixedMaterial {
        index: usize,
        expected: u32,
        found: u32,
    },
}
