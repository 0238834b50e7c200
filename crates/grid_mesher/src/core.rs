//! Core type definitions for the grid mesher.

use bytemuck::{Pod, Zeroable};

/// Material identifier for a grid cell.
pub type MaterialId = u32;

/// Reserved material value for empty cells. Never opens a run.
pub const MATERIAL_EMPTY: MaterialId = 0;

/// How the row scanner groups non-empty cells into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunMode {
    /// A change of material closes the current run even without a gap.
    #[default]
    Material,
    /// Only occupancy matters; material changes are ignored.
    ShapeOnly,
}

impl RunMode {
    /// Map the classic `shape_only` flag onto a mode.
    pub fn from_shape_only(shape_only: bool) -> Self {
        if shape_only {
            RunMode::ShapeOnly
        } else {
            RunMode::Material
        }
    }

    pub fn is_shape_only(self) -> bool {
        matches!(self, RunMode::ShapeOnly)
    }
}

/// A maximal run of non-empty cells within one row.
///
/// `start` and `end` are inclusive column indices. `material` is `Some` when the
/// run was captured in [`RunMode::Material`], and `None` when only occupancy was
/// considered. The merger only joins runs whose bounds *and* material key match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: u32,
    pub end: u32,
    pub material: Option<MaterialId>,
}

impl Run {
    /// An occupancy-only run covering `start..=end`.
    #[inline]
    pub fn span(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "run start after end");
        Self {
            start,
            end,
            material: None,
        }
    }

    /// A run of a single material covering `start..=end`.
    #[inline]
    pub fn with_material(start: u32, end: u32, material: MaterialId) -> Self {
        debug_assert!(start <= end, "run start after end");
        Self {
            start,
            end,
            material: Some(material),
        }
    }

    #[inline]
    pub fn bounds(&self) -> (u32, u32) {
        (self.start, self.end)
    }

    /// Number of cells in the run; 0 if `end < start`.
    #[inline]
    pub fn len(&self) -> u32 {
        inclusive_len(self.start, self.end)
    }
}

/// Length of the inclusive range `start..=end`, 0 when inverted.
#[inline]
fn inclusive_len(start: u32, end: u32) -> u32 {
    end.checked_sub(start).map_or(0, |d| d + 1)
}

/// Axis-aligned rectangle given by two inclusive corners.
///
/// Layout is four `u32`s so a slice of rectangles can be handed to a renderer
/// as a flat buffer via [`bytemuck`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct Rectangle {
    pub row_start: u32,
    pub col_start: u32,
    pub row_end: u32,
    pub col_end: u32,
}

impl Rectangle {
    #[inline]
    pub const fn new(row_start: u32, col_start: u32, row_end: u32, col_end: u32) -> Self {
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// A one-row rectangle covering a single run.
    #[inline]
    pub fn from_run(row: u32, run: &Run) -> Self {
        Self {
            row_start: row,
            col_start: run.start,
            row_end: row,
            col_end: run.end,
        }
    }

    /// `((row_start, col_start), (row_end, col_end))`
    #[inline]
    pub fn corners(&self) -> ((u32, u32), (u32, u32)) {
        ((self.row_start, self.col_start), (self.row_end, self.col_end))
    }

    /// Canonical ordering key: start corner, then end corner.
    #[inline]
    pub fn sort_key(&self) -> (u32, u32, u32, u32) {
        (self.row_start, self.col_start, self.row_end, self.col_end)
    }

    /// Number of columns covered; 0 for inverted corners.
    #[inline]
    pub fn width(&self) -> u32 {
        inclusive_len(self.col_start, self.col_end)
    }

    /// Number of rows covered; 0 for inverted corners.
    #[inline]
    pub fn height(&self) -> u32 {
        inclusive_len(self.row_start, self.row_end)
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.row_start..=self.row_end).contains(&row)
            && (self.col_start..=self.col_end).contains(&col)
    }
}

/// The sorted set of rectangles covering a grid's non-empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mesh {
    rects: Vec<Rectangle>,
}

impl Mesh {
    /// Build a mesh, sorting the rectangles into canonical order.
    pub fn from_rectangles(mut rects: Vec<Rectangle>) -> Self {
        rects.sort_unstable_by_key(Rectangle::sort_key);
        Self { rects }
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rects
    }

    pub fn into_rectangles(self) -> Vec<Rectangle> {
        self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Total cells covered by all rectangles.
    pub fn covered_cells(&self) -> usize {
        self.rects.iter().map(Rectangle::area).sum()
    }

    /// Flat view: `[row_start, col_start, row_end, col_end]` per rectangle.
    pub fn as_flat(&self) -> &[u32] {
        bytemuck::cast_slice(&self.rects)
    }

    pub fn corner_pairs(&self) -> Vec<((u32, u32), (u32, u32))> {
        self.rects.iter().map(Rectangle::corners).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_mode_from_flag() {
        assert_eq!(RunMode::from_shape_only(true), RunMode::ShapeOnly);
        assert_eq!(RunMode::from_shape_only(false), RunMode::Material);
        assert!(RunMode::ShapeOnly.is_shape_only());
        assert_eq!(RunMode::default(), RunMode::Material);
    }

    #[test]
    fn run_len_and_bounds() {
        let run = Run::with_material(2, 5, 7);
        assert_eq!(run.bounds(), (2, 5));
        assert_eq!(run.len(), 4);
        assert_eq!(Run::span(3, 3).len(), 1);
    }

    #[test]
    fn rectangle_dimensions() {
        let rect = Rectangle::new(1, 2, 3, 6);
        assert_eq!(rect.width(), 5);
        assert_eq!(rect.height(), 3);
        assert_eq!(rect.area(), 15);
        assert!(rect.contains(2, 4));
        assert!(!rect.contains(0, 4));
        assert!(!rect.contains(2, 7));
    }

    #[test]
    fn inverted_bounds_have_zero_extent() {
        let run = Run {
            start: 4,
            end: 2,
            material: None,
        };
        assert_eq!(run.len(), 0);

        let rect = Rectangle::new(3, 5, 1, 2);
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);
        assert_eq!(rect.area(), 0);
    }

    #[test]
    fn mesh_sorts_by_corner_tuple() {
        let mesh = Mesh::from_rectangles(vec![
            Rectangle::new(3, 0, 3, 3),
            Rectangle::new(1, 3, 2, 3),
            Rectangle::new(0, 0, 0, 3),
            Rectangle::new(1, 0, 2, 0),
        ]);
        assert_eq!(
            mesh.corner_pairs(),
            vec![((0, 0), (0, 3)), ((1, 0), (2, 0)), ((1, 3), (2, 3)), ((3, 0), (3, 3))]
        );
    }

    #[test]
    fn mesh_flat_view() {
        let mesh = Mesh::from_rectangles(vec![
            Rectangle::new(0, 1, 2, 3),
            Rectangle::new(4, 5, 6, 7),
        ]);
        assert_eq!(mesh.as_flat(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(mesh.covered_cells(), 9 + 9);
    }
}
