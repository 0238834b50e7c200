//! Row scanner: detects maximal runs of non-empty cells in a single row.
//!
//! Runs are emitted left to right, so the output is already sorted by start
//! column and runs never overlap. Scanning has no cross-row state, so rows may
//! be scanned in any order (or in parallel) before merging.

use crate::core::{MaterialId, Run, RunMode, MATERIAL_EMPTY};

/// Capture the runs of one row.
///
/// In [`RunMode::Material`] a change of material closes the current run and
/// opens a new one at the same column. In [`RunMode::ShapeOnly`] consecutive
/// non-empty cells always share a run. An empty cell closes any open run.
///
/// # Example
/// ```
/// use grid_mesher::{capture_row_runs, RunMode};
///
/// let runs = capture_row_runs(&[1, 2, 2, 1], RunMode::Material);
/// let bounds: Vec<_> = runs.iter().map(|r| r.bounds()).collect();
/// assert_eq!(bounds, vec![(0, 0), (1, 2), (3, 3)]);
///
/// let runs = capture_row_runs(&[1, 2, 2, 1], RunMode::ShapeOnly);
/// assert_eq!(runs[0].bounds(), (0, 3));
/// ```
pub fn capture_row_runs(row: &[MaterialId], mode: RunMode) -> Vec<Run> {
    let mut runs = Vec::new();
    // (start column, material of the open run)
    let mut open: Option<(u32, MaterialId)> = None;

    for (idx, &material) in row.iter().enumerate() {
        let col = idx as u32;

        if material == MATERIAL_EMPTY {
            if let Some((start, run_material)) = open.take() {
                runs.push(make_run(start, col - 1, run_material, mode));
            }
            continue;
        }

        match open {
            None => open = Some((col, material)),
            Some((start, run_material)) => {
                if mode == RunMode::Material && run_material != material {
                    runs.push(make_run(start, col - 1, run_material, mode));
                    open = Some((col, material));
                }
            }
        }
    }

    if let Some((start, run_material)) = open {
        runs.push(make_run(start, row.len() as u32 - 1, run_material, mode));
    }

    runs
}

#[inline]
fn make_run(start: u32, end: u32, material: MaterialId, mode: RunMode) -> Run {
    match mode {
        RunMode::Material => Run::with_material(start, end, material),
        RunMode::ShapeOnly => Run::span(start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(row: &[MaterialId], mode: RunMode) -> Vec<(u32, u32)> {
        capture_row_runs(row, mode).iter().map(Run::bounds).collect()
    }

    #[test]
    fn gap_separates_runs_in_both_modes() {
        assert_eq!(bounds(&[2, 0, 0, 1], RunMode::ShapeOnly), vec![(0, 0), (3, 3)]);
        assert_eq!(bounds(&[2, 0, 0, 1], RunMode::Material), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn material_change_splits_without_gap() {
        assert_eq!(bounds(&[1, 2, 2, 1], RunMode::Material), vec![(0, 0), (1, 2), (3, 3)]);
        assert_eq!(bounds(&[1, 2, 2, 1], RunMode::ShapeOnly), vec![(0, 3)]);
    }

    #[test]
    fn runs_carry_material_key() {
        let runs = capture_row_runs(&[0, 5, 5, 7], RunMode::Material);
        assert_eq!(runs, vec![Run::with_material(1, 2, 5), Run::with_material(3, 3, 7)]);

        let runs = capture_row_runs(&[0, 5, 5, 7], RunMode::ShapeOnly);
        assert_eq!(runs, vec![Run::span(1, 3)]);
    }

    #[test]
    fn empty_and_full_rows() {
        assert!(capture_row_runs(&[0, 0, 0], RunMode::Material).is_empty());
        assert!(capture_row_runs(&[], RunMode::ShapeOnly).is_empty());
        assert_eq!(bounds(&[3, 3, 3, 3], RunMode::Material), vec![(0, 3)]);
        assert_eq!(bounds(&[9], RunMode::Material), vec![(0, 0)]);
    }

    #[test]
    fn run_open_at_end_of_row_is_closed() {
        assert_eq!(bounds(&[0, 0, 4, 4], RunMode::Material), vec![(2, 3)]);
        assert_eq!(bounds(&[1, 0, 2, 3], RunMode::Material), vec![(0, 0), (2, 2), (3, 3)]);
    }

    #[test]
    fn adjacent_runs_are_not_mergeable() {
        let row = [1, 1, 2, 0, 2, 3, 3, 0, 0, 4];
        for mode in [RunMode::Material, RunMode::ShapeOnly] {
            let runs = capture_row_runs(&row, mode);
            for pair in runs.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(a.end < b.start);
                // touching runs only exist when materials differ
                if a.end + 1 == b.start {
                    assert_eq!(mode, RunMode::Material);
                    assert_ne!(a.material, b.material);
                }
            }
        }
    }
}
