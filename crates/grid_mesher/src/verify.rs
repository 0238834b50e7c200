//! Mesh verification for debugging and tests.
//!
//! Builds a per-cell coverage map of a mesh and checks it against the grid it
//! was produced from.

use crate::core::{Mesh, RunMode, MATERIAL_EMPTY};
use crate::error::MeshDefect;
use crate::grid::Grid;

/// Index of the rectangle covering each cell, row-major.
///
/// Rectangles falling outside `rows x cols` are clipped. When two rectangles
/// overlap the later one wins; use [`verify_mesh`] to detect that.
pub fn coverage_map(rows: usize, cols: usize, mesh: &Mesh) -> Vec<Option<usize>> {
    let mut map = vec![None; rows * cols];
    for (index, rect) in mesh.rectangles().iter().enumerate() {
        let row_end = (rect.row_end as usize + 1).min(rows);
        let col_end = (rect.col_end as usize + 1).min(cols);
        for row in rect.row_start as usize..row_end {
            for col in rect.col_start as usize..col_end {
                map[row * cols + col] = Some(index);
            }
        }
    }
    map
}

/// Check that `mesh` exactly and disjointly covers the occupied cells of `grid`.
///
/// In [`RunMode::Material`] every rectangle must also hold a single material.
/// Returns the first defect found.
pub fn verify_mesh(grid: &Grid, mesh: &Mesh, mode: RunMode) -> Result<(), MeshDefect> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut owner: Vec<Option<usize>> = vec![None; rows * cols];

    for (index, rect) in mesh.rectangles().iter().enumerate() {
        if rect.row_start > rect.row_end || rect.col_start > rect.col_end {
            return Err(MeshDefect::InvertedCorners { index });
        }
        if rect.row_end as usize >= rows || rect.col_end as usize >= cols {
            return Err(MeshDefect::OutOfBounds { index, rows, cols });
        }

        let expected = grid
            .get(rect.row_start as usize, rect.col_start as usize)
            .unwrap_or(MATERIAL_EMPTY);

        for row in rect.row_start..=rect.row_end {
            for col in rect.col_start..=rect.col_end {
                let cell = row as usize * cols + col as usize;
                let material = grid
                    .get(row as usize, col as usize)
                    .unwrap_or(MATERIAL_EMPTY);
                if material == MATERIAL_EMPTY {
                    return Err(MeshDefect::CoversEmpty { index, row, col });
                }
                if mode == RunMode::Material && material != expected {
                    return Err(MeshDefect::MixedMaterial {
                        index,
                        expected,
                        found: material,
                    });
                }
                if let Some(first) = owner[cell] {
                    return Err(MeshDefect::Overlap {
                        row,
                        col,
                        first,
                        second: index,
                    });
                }
                owner[cell] = Some(index);
            }
        }
    }

    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, &material) in cells.iter().enumerate() {
            if material != MATERIAL_EMPTY && owner[row * cols + col].is_none() {
                return Err(MeshDefect::Uncovered {
                    row: row as u32,
                    col: col as u32,
                });
            }
        }
    }

    Ok(())
}
