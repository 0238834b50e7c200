//! Main meshing pipeline.
//!
//! Orchestrates the complete meshing process:
//! 1. Row scanning (runs per row)
//! 2. Row merging (grow runs downward into rectangles)
//! 3. Canonical sort of the finished rectangles

use tracing::debug;

use crate::core::{Mesh, Run, RunMode};
use crate::error::GridError;
use crate::grid::Grid;
use crate::merge::RowMerger;
use crate::scan::capture_row_runs;

/// Mesh a grid into sorted rectangles.
///
/// This is the main entry point for meshing.
///
/// # Example
/// ```
/// use grid_mesher::{greedy_index, Grid, RunMode};
///
/// let grid = Grid::from_rows(&[
///     vec![2, 1, 1, 2],
///     vec![2, 0, 0, 2],
///     vec![2, 0, 0, 2],
///     vec![2, 1, 1, 2],
/// ]).unwrap();
///
/// let mesh = greedy_index(&grid, RunMode::ShapeOnly);
/// assert_eq!(
///     mesh.corner_pairs(),
///     vec![((0, 0), (0, 3)), ((1, 0), (2, 0)), ((1, 3), (2, 3)), ((3, 0), (3, 3))],
/// );
/// ```
pub fn greedy_index(grid: &Grid, mode: RunMode) -> Mesh {
    greedy_index_observed(grid, mode, |_, _| {})
}

/// Validate raw signed rows, then mesh them.
///
/// Fails with [`GridError::MalformedGrid`] for ragged input and
/// [`GridError::InvalidMaterialId`] for negative ids, before any scanning.
pub fn greedy_index_rows<R: AsRef<[i64]>>(
    rows: &[R],
    shape_only: bool,
) -> Result<Mesh, GridError> {
    let grid = Grid::from_signed_rows(rows)?;
    Ok(greedy_index(&grid, RunMode::from_shape_only(shape_only)))
}

/// Mesh a grid, calling `observer(row, runs)` once per row with that row's runs.
///
/// Rows are reported in increasing order, before they are merged.
pub fn greedy_index_observed<F>(grid: &Grid, mode: RunMode, mut observer: F) -> Mesh
where
    F: FnMut(usize, &[Run]),
{
    let mut merger = RowMerger::with_capacity(grid.cols() / 2);
    for (row, cells) in grid.iter_rows().enumerate() {
        let runs = capture_row_runs(cells, mode);
        observer(row, &runs);
        merger.push_row(&runs);
    }
    let mesh = merger.finish();

    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        ?mode,
        rectangles = mesh.len(),
        "meshed grid"
    );
    mesh
}

/// Statistics about a mesh result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshStats {
    pub rows: usize,
    pub cols: usize,
    /// Non-empty cells in the grid (the quad count without merging).
    pub occupied_cells: usize,
    /// Total runs over all rows (the quad count with row merging only).
    pub run_count: usize,
    pub rectangle_count: usize,
    /// 1.0 - rectangles / occupied cells; 0.0 for an empty grid.
    pub merge_efficiency: f32,
}

/// Mesh a grid and return statistics along with the mesh.
pub fn greedy_index_with_stats(grid: &Grid, mode: RunMode) -> (Mesh, MeshStats) {
    let mut run_count = 0usize;
    let mesh = greedy_index_observed(grid, mode, |_, runs| run_count += runs.len());

    let occupied_cells = grid.occupied_count();
    let merge_efficiency = if occupied_cells > 0 {
        1.0 - (mesh.len() as f32 / occupied_cells as f32)
    } else {
        0.0
    };

    let stats = MeshStats {
        rows: grid.rows(),
        cols: grid.cols(),
        occupied_cells,
        run_count,
        rectangle_count: mesh.len(),
        merge_efficiency,
    };
    (mesh, stats)
}

/// Mesher configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshConfig {
    pub mode: RunMode,
}

impl MeshConfig {
    pub fn shape_only() -> Self {
        Self {
            mode: RunMode::ShapeOnly,
        }
    }
}

/// A configured mesher.
#[derive(Debug, Clone, Default)]
pub struct GreedyMesher {
    config: MeshConfig,
}

impl GreedyMesher {
    pub fn new(config: MeshConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn mesh(&self, grid: &Grid) -> Mesh {
        greedy_index(grid, self.config.mode)
    }

    pub fn mesh_with_stats(&self, grid: &Grid) -> (Mesh, MeshStats) {
        greedy_index_with_stats(grid, self.config.mode)
    }

    pub fn mesh_observed<F: FnMut(usize, &[Run])>(&self, grid: &Grid, observer: F) -> Mesh {
        greedy_index_observed(grid, self.config.mode, observer)
    }
}
