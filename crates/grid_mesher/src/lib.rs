//! Greedy meshing of 2D material grids into axis-aligned rectangles.
//!
//! Each row is scanned into maximal runs, then runs are grown downward into
//! rectangles whenever the exact same column interval recurs in the next row.
//!
//! # Example
//!
//! ```
//! use grid_mesher::{greedy_index, Grid, RunMode};
//!
//! let grid = Grid::from_rows(&[vec![1, 1, 0], vec![1, 1, 0]]).unwrap();
//!
//! let mesh = greedy_index(&grid, RunMode::Material);
//! assert_eq!(mesh.corner_pairs(), vec![((0, 0), (1, 1))]);
//! ```

pub mod core;
pub mod error;
pub mod grid;
pub mod scan;
pub mod merge;
pub mod mesh;
pub mod verify;

// Re-export primary types
pub use crate::core::{
    MaterialId, MATERIAL_EMPTY,
    Run, RunMode,
    Rectangle, Mesh,
};
pub use crate::error::{GridError, MeshDefect};
pub use crate::grid::Grid;

// Re-export main entry points
pub use crate::scan::capture_row_runs;
pub use crate::merge::{merge_row_runs, RowMerger};
pub use crate::mesh::{
    greedy_index,
    greedy_index_rows,
    greedy_index_observed,
    greedy_index_with_stats,
    GreedyMesher, MeshConfig, MeshStats,
};
pub use crate::verify::{coverage_map, verify_mesh};
