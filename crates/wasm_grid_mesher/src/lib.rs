//! WASM bindings for the grid mesher.
//!
//! Provides JavaScript-accessible functions for 2D greedy meshing.

use wasm_bindgen::prelude::*;
use grid_mesher::{
    greedy_index_with_stats,
    Grid, GridError, MaterialId, Mesh, MeshStats, RunMode,
};

/// Mesh result returned to JavaScript.
///
/// Rectangles are flattened as `[row_start, col_start, row_end, col_end]`,
/// four entries per rectangle, in canonical sorted order.
#[wasm_bindgen]
pub struct MeshResult {
    rectangles: Vec<u32>,
    occupied_cells: usize,
    run_count: usize,
    merge_efficiency: f32,
}

#[wasm_bindgen]
impl MeshResult {
    /// Get flattened rectangle corners (4 values per rectangle).
    #[wasm_bindgen(getter)]
    pub fn rectangles(&self) -> Vec<u32> {
        self.rectangles.clone()
    }

    /// Number of rectangles in the mesh.
    #[wasm_bindgen(getter)]
    pub fn rectangle_count(&self) -> usize {
        self.rectangles.len() / 4
    }

    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> usize {
        self.occupied_cells
    }

    #[wasm_bindgen(getter)]
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    #[wasm_bindgen(getter)]
    pub fn merge_efficiency(&self) -> f32 {
        self.merge_efficiency
    }

    /// Whether the mesh is empty (no rectangles).
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }
}

impl MeshResult {
    fn new(mesh: &Mesh, stats: &MeshStats) -> Self {
        Self {
            rectangles: mesh.as_flat().to_vec(),
            occupied_cells: stats.occupied_cells,
            run_count: stats.run_count,
            merge_efficiency: stats.merge_efficiency,
        }
    }
}

/// Mesh a flat, row-major grid of material ids.
///
/// # Arguments
/// * `cells` - Material id per cell (0 = empty), row-major
/// * `width` - Number of cells per row
/// * `shape_only` - Merge by occupancy only, ignoring material ids
///
/// # Example (JavaScript)
/// ```javascript
/// const cells = new Int32Array([2, 1, 1, 2, 2, 0, 0, 2]);
/// const result = mesh_grid(cells, 4, true);
/// console.log(result.rectangle_count);
/// ```
#[wasm_bindgen]
pub fn mesh_grid(cells: &[i32], width: u32, shape_only: bool) -> Result<MeshResult, JsValue> {
    mesh_cells(cells, width as usize, shape_only).map_err(|err| {
        log(&format!("[wasm_grid_mesher] rejected grid: {err}"));
        JsValue::from_str(&err.to_string())
    })
}

fn mesh_cells(cells: &[i32], width: usize, shape_only: bool) -> Result<MeshResult, GridError> {
    let grid = grid_from_signed(cells, width)?;
    let (mesh, stats) = greedy_index_with_stats(&grid, RunMode::from_shape_only(shape_only));

    log(&format!(
        "[wasm_grid_mesher] {}x{} grid -> {} rectangles",
        stats.rows, stats.cols, stats.rectangle_count
    ));

    Ok(MeshResult::new(&mesh, &stats))
}

fn grid_from_signed(cells: &[i32], width: usize) -> Result<Grid, GridError> {
    let ids = cells
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            MaterialId::try_from(value).map_err(|_| GridError::InvalidMaterialId {
                row: i / width.max(1),
                col: i % width.max(1),
                value: value.into(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_flat(ids, width)
}

// Logging support

thread_local! {
    static LOG_ENABLED: std::cell::Cell<bool> = std::cell::Cell::new(false);
}

/// Enable or disable console logging.
#[wasm_bindgen]
pub fn set_log_enabled(enabled: bool) {
    LOG_ENABLED.with(|flag| flag.set(enabled));
}

fn log(message: &str) {
    if LOG_ENABLED.with(|enabled| enabled.get()) {
        web_sys::console::log_1(&message.into());
    }
}

/// Get the version of the mesher library.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meshes_flat_border_grid() {
        let cells = [2, 1, 1, 2, 2, 0, 0, 2, 2, 0, 0, 2, 2, 1, 1, 2];
        let result = mesh_cells(&cells, 4, true).unwrap();
        assert_eq!(result.rectangle_count(), 4);
        assert_eq!(
            result.rectangles(),
            vec![0, 0, 0, 3, 1, 0, 2, 0, 1, 3, 2, 3, 3, 0, 3, 3]
        );
        assert_eq!(result.occupied_cells(), 12);
        assert_eq!(result.run_count(), 6);
        assert!(!result.is_empty());
    }

    #[test]
    fn rejects_negative_ids() {
        let err = mesh_cells(&[1, 0, -3, 1], 2, false).err();
        let expected = GridError::InvalidMaterialId {
            row: 1,
            col: 0,
            value: -3,
        };
        assert_eq!(err, Some(expected));
    }

    #[test]
    fn rejects_bad_width() {
        let err = mesh_cells(&[1, 1, 1], 2, false).err();
        assert_eq!(err, Some(GridError::ReshapeLength { len: 3, width: 2 }));
        assert_eq!(mesh_cells(&[1], 0, false).err(), Some(GridError::ZeroWidth));
    }

    #[test]
    fn empty_grid_is_empty_mesh() {
        let result = mesh_cells(&[], 3, false).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.merge_efficiency(), 0.0);
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn mesh_grid_returns_result() {
        let result = mesh_grid(&[3, 3, 0, 3, 3, 0], 3, false).unwrap();
        assert_eq!(result.rectangles(), vec![0, 0, 1, 1]);
        assert_eq!(result.occupied_cells(), 4);
    }

    #[wasm_bindgen_test]
    fn mesh_grid_rejects_negative_id_with_message() {
        let err = mesh_grid(&[1, -2], 2, false).err().unwrap();
        let message = err.as_string().unwrap();
        assert!(message.starts_with("invalid material id -2"), "{message}");
    }

    #[wasm_bindgen_test]
    fn mesh_grid_rejects_zero_width() {
        assert!(mesh_grid(&[1, 1], 0, true).is_err());
    }
}
