//! Row merger: grows per-row runs downward into rectangles.
//!
//! Rectangles live in an arena. The rectangles still open after row `i - 1`
//! are indexed by their run key (column bounds plus material key), and a run
//! in row `i` extends a rectangle only on an exact key match. Anything not
//! extended stays behind as a finished rectangle.

use std::collections::HashMap;

use tracing::trace;

use crate::core::{Mesh, Rectangle, Run};

/// Merge the per-row run lists into a sorted mesh.
///
/// `rows[i]` must be the scanner output for row `i`: sorted, disjoint runs.
/// Malformed input is not detected.
///
/// # Example
/// ```
/// use grid_mesher::{merge_row_runs, Run};
///
/// let rows = vec![vec![Run::span(0, 3)]; 4];
/// let mesh = merge_row_runs(&rows);
/// assert_eq!(mesh.corner_pairs(), vec![((0, 0), (3, 3))]);
/// ```
pub fn merge_row_runs(rows: &[Vec<Run>]) -> Mesh {
    let mut merger = RowMerger::with_capacity(rows.first().map_or(0, Vec::len));
    for runs in rows {
        merger.push_row(runs);
    }
    merger.finish()
}

/// Incremental form of [`merge_row_runs`], fed one row at a time.
#[derive(Debug, Default)]
pub struct RowMerger {
    rects: Vec<Rectangle>,
    /// Rectangles whose far corner lies in the last pushed row.
    open: HashMap<Run, usize>,
    next_open: HashMap<Run, usize>,
    row: u32,
}

impl RowMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(runs_per_row: usize) -> Self {
        Self {
            rects: Vec::with_capacity(runs_per_row),
            open: HashMap::with_capacity(runs_per_row),
            next_open: HashMap::with_capacity(runs_per_row),
            row: 0,
        }
    }

    /// Number of rows consumed so far.
    pub fn rows_pushed(&self) -> u32 {
        self.row
    }

    /// Consume the runs of the next row.
    pub fn push_row(&mut self, runs: &[Run]) {
        let row = self.row;
        let mut extended = 0usize;

        for run in runs {
            let index = match self.open.get(run) {
                Some(&index) => {
                    let rect = &mut self.rects[index];
                    rect.row_end = row;
                    rect.col_end = run.end;
                    extended += 1;
                    index
                }
                None => {
                    self.rects.push(Rectangle::from_run(row, run));
                    self.rects.len() - 1
                }
            };
            self.next_open.insert(*run, index);
        }

        trace!(row, runs = runs.len(), extended, "merged row");

        std::mem::swap(&mut self.open, &mut self.next_open);
        self.next_open.clear();
        self.row += 1;
    }

    /// Close all rectangles and return them in canonical order.
    pub fn finish(self) -> Mesh {
        Mesh::from_rectangles(self.rects)
    }
}
