//! Rectangular material grid.
//!
//! The grid is the validated, read-only input to the mesher. All shape and
//! material checks happen at construction so that scanning and merging never
//! see malformed data.

use crate::core::{MaterialId, MATERIAL_EMPTY};
use crate::error::GridError;

/// Row-major grid of material ids (0 = empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<MaterialId>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from nested rows.
    ///
    /// Every row must have the same length as the first.
    ///
    /// # Example
    /// ```
    /// use grid_mesher::Grid;
    ///
    /// let grid = Grid::from_rows(&[vec![1, 0], vec![2, 2]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    /// assert!(Grid::from_rows(&[vec![1, 0], vec![2]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[MaterialId]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = check_rectangular::<MaterialId, R>(rows)?;

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for values in rows {
            cells.extend_from_slice(values.as_ref());
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Build a grid from signed ids, rejecting negative (or oversized) values.
    ///
    /// Row lengths are checked for every row before any value is inspected, so
    /// ragged input reports [`GridError::MalformedGrid`] even when it also holds
    /// invalid ids.
    pub fn from_signed_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = check_rectangular::<i64, R>(rows)?;

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.as_ref().iter().enumerate() {
                let id = MaterialId::try_from(value)
                    .map_err(|_| GridError::InvalidMaterialId { row, col, value })?;
                cells.push(id);
            }
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Reshape a flat row-major array into rows of `width` cells.
    ///
    /// # Example
    /// ```
    /// use grid_mesher::Grid;
    ///
    /// let grid = Grid::from_flat(vec![1, 1, 0, 0, 2, 2], 3).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.row(1), &[0, 2, 2]);
    /// ```
    pub fn from_flat(cells: Vec<MaterialId>, width: usize) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        if cells.len() % width != 0 {
            return Err(GridError::ReshapeLength {
                len: cells.len(),
                width,
            });
        }
        let rows = cells.len() / width;
        check_dims(rows, width)?;
        Ok(Self {
            cells,
            rows,
            cols: width,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells of row `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.rows()`.
    #[inline]
    pub fn row(&self, index: usize) -> &[MaterialId] {
        &self.cells[index * self.cols..(index + 1) * self.cols]
    }

    /// Material at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<MaterialId> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[MaterialId]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Count of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != MATERIAL_EMPTY).count()
    }
}

/// Width shared by all rows, or the first row whose length differs.
fn check_rectangular<T, R: AsRef<[T]>>(rows: &[R]) -> Result<usize, GridError> {
    let cols = rows.first().map_or(0, |r| r.as_ref().len());
    check_dims(rows.len(), cols)?;

    for (row, values) in rows.iter().enumerate() {
        let found = values.as_ref().len();
        if found != cols {
            return Err(GridError::MalformedGrid {
                row,
                expected: cols,
                found,
            });
        }
    }
    Ok(cols)
}

fn check_dims(rows: usize, cols: usize) -> Result<(), GridError> {
    if u32::try_from(rows).is_err() || u32::try_from(cols).is_err() {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(())
}
