//! Grid editing session for the window-unit builder.
//!
//! `GridEditor` owns the current grid snapshot and selection:
//! - Placement, row/column append and dimension edits
//! - Adjacency-constrained selection and rectangle merge
//! - Typed dimension input through the expression evaluator
//! - JSON snapshot import/export for the host application
//!
//! Every edit swaps in a new snapshot; rejected edits keep the old one.

pub(crate) mod mutation;

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::layout::GridLayout;
use crate::types::{CellId, GridConfig, Selection};

pub use mutation::Axis;

/// Sash descriptor carried by each cell; opaque to the engine.
pub type Sash = Value;

/// Most rows or columns an editor will create.
pub const MAX_TRACKS: u32 = 4096;

/// The main editor struct exported to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct GridEditor {
    grid: Grid<Sash>,
    selection: Selection,
}

impl Default for GridEditor {
    fn default() -> Self {
        Self::from_grid(Grid::new())
    }
}

impl GridEditor {
    /// Editor over `rows` x `cols` default-sized rows and columns with no cells.
    ///
    /// Fails with `GridError::TooLarge` past `MAX_TRACKS` rows or columns.
    pub fn empty(rows: u32, cols: u32, config: GridConfig) -> Result<Self> {
        if rows > MAX_TRACKS || cols > MAX_TRACKS {
            return Err(GridError::TooLarge {
                rows,
                cols,
                max: MAX_TRACKS,
            });
        }
        Ok(Self::from_grid(blank_grid(rows, cols, config)))
    }

    /// The builder's starting layout: 2 rows x 3 columns with a wide
    /// top-left cell, a tall right cell and two single cells below.
    #[must_use]
    pub fn with_default_layout(config: GridConfig) -> Self {
        let grid = blank_grid(2, 3, config)
            .place_spanning_cell(0, 0, 1, 2, Sash::Null)
            .place_spanning_cell(0, 2, 2, 1, Sash::Null)
            .place_cell(1, 0, Sash::Null)
            .place_cell(1, 1, Sash::Null);
        Self::from_grid(grid)
    }

    #[must_use]
    pub fn from_grid(grid: Grid<Sash>) -> Self {
        Self {
            grid,
            selection: Selection::new(),
        }
    }

    /// Current snapshot
    pub fn grid(&self) -> &Grid<Sash> {
        &self.grid
    }

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Geometry of the current snapshot.
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(&self.grid)
    }

    /// Append a row; ignored once the grid has `MAX_TRACKS` rows.
    pub fn add_row(&mut self) {
        if self.grid.row_count() >= MAX_TRACKS {
            tracing::debug!(rows = self.grid.row_count(), "ignoring add_row at limit");
            return;
        }
        self.grid = self.grid.add_row();
    }

    /// Append a column; ignored once the grid has `MAX_TRACKS` columns.
    pub fn add_column(&mut self) {
        if self.grid.column_count() >= MAX_TRACKS {
            tracing::debug!(cols = self.grid.column_count(), "ignoring add_column at limit");
            return;
        }
        self.grid = self.grid.add_column();
    }

    /// Place a 1x1 cell. Returns `false` if the position was occupied or outside the grid.
    pub fn place_cell(&mut self, row: u32, col: u32, payload: Sash) -> bool {
        let next = self.grid.place_cell(row, col, payload);
        let placed = next.cell_count() > self.grid.cell_count();
        self.grid = next;
        placed
    }

    /// Toggle a cell in the selection. Returns `false` if the request was ignored.
    pub fn toggle_selection(&mut self, id: CellId) -> bool {
        let next = self.selection.toggle(&self.grid, id);
        let changed = next != self.selection;
        self.selection = next;
        changed
    }

    pub fn clear_selection(&mut self) {
        self.selection = self.selection.cleared();
    }

    /// True if the current selection can be merged.
    pub fn can_merge(&self) -> bool {
        self.grid.can_merge(&self.selection)
    }

    /// Merge the selected cells.
    ///
    /// Returns `Ok(false)` when fewer than two cells are selected. On success
    /// the selection is cleared; on failure grid and selection are untouched.
    pub fn merge_selection(&mut self, payload: Option<Sash>) -> Result<bool> {
        if self.selection.len() <= 1 {
            return Ok(false);
        }
        self.grid = self.grid.merge(&self.selection, payload)?;
        self.clear_selection();
        Ok(true)
    }

    /// Set a row height or column width. Returns `false` if rejected.
    pub fn set_dimension(&mut self, axis: Axis, index: u32, size: f64) -> bool {
        self.replace_grid(mutation::apply_dimension(&self.grid, axis, index, size))
    }

    /// Set a row height or column width from typed text such as `"600 + 50"`.
    /// Returns `false` if the text does not evaluate or the size is rejected.
    pub fn commit_dimension(&mut self, axis: Axis, index: u32, text: &str) -> bool {
        self.replace_grid(mutation::apply_dimension_input(
            &self.grid, axis, index, text,
        ))
    }

    /// Serialize the current snapshot.
    pub fn to_json(&self) -> Result<String> {
        self.grid.to_json()
    }

    /// Replace the snapshot with one loaded from JSON; clears the selection.
    ///
    /// The session's config is kept.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let config = *self.grid.config();
        self.grid = Grid::from_json(json)?.with_config(config);
        self.clear_selection();
        Ok(())
    }

    fn replace_grid(&mut self, next: Option<Grid<Sash>>) -> bool {
        match next {
            Some(grid) => {
                self.grid = grid;
                true
            }
            None => false,
        }
    }
}

fn blank_grid(rows: u32, cols: u32, config: GridConfig) -> Grid<Sash> {
    Grid::with_dimensions(
        vec![config.default_row_height; rows as usize],
        vec![config.default_column_width; cols as usize],
    )
    .with_config(config)
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn config_from_js(config: JsValue) -> std::result::Result<GridConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(GridConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridEditor {
    /// Create an editor over `rows` x `cols` empty positions.
    #[wasm_bindgen(constructor)]
    pub fn js_new(rows: u32, cols: u32, config: JsValue) -> std::result::Result<GridEditor, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self::empty(rows, cols, config_from_js(config)?)?)
    }

    /// Create an editor with the builder's starting layout.
    #[wasm_bindgen(js_name = withDefaultLayout)]
    pub fn js_with_default_layout(config: JsValue) -> std::result::Result<GridEditor, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self::with_default_layout(config_from_js(config)?))
    }

    #[wasm_bindgen(js_name = addRow)]
    pub fn js_add_row(&mut self) {
        self.add_row();
    }

    #[wasm_bindgen(js_name = addColumn)]
    pub fn js_add_column(&mut self) {
        self.add_column();
    }

    #[wasm_bindgen(js_name = placeCell)]
    pub fn js_place_cell(
        &mut self,
        row: u32,
        col: u32,
        payload: JsValue,
    ) -> std::result::Result<bool, JsValue> {
        let payload: Sash = if payload.is_undefined() {
            Sash::Null
        } else {
            serde_wasm_bindgen::from_value(payload).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(self.place_cell(row, col, payload))
    }

    /// Toggle a cell by its `cell-{row}-{col}` id.
    #[wasm_bindgen(js_name = toggleSelection)]
    pub fn js_toggle_selection(&mut self, id: &str) -> bool {
        match CellId::parse(id) {
            Some(id) => self.toggle_selection(id),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn js_clear_selection(&mut self) {
        self.clear_selection();
    }

    /// Selected ids in pick order.
    #[wasm_bindgen(js_name = selectedIds)]
    pub fn js_selected_ids(&self) -> Vec<String> {
        self.selection.ids().iter().map(ToString::to_string).collect()
    }

    #[wasm_bindgen(js_name = canMerge)]
    pub fn js_can_merge(&self) -> bool {
        self.can_merge()
    }

    /// Merge the selection; rejects with a message for non-rectangular selections.
    #[wasm_bindgen(js_name = mergeSelection)]
    pub fn js_merge_selection(&mut self, payload: JsValue) -> std::result::Result<bool, JsValue> {
        let payload: Option<Sash> = if payload.is_undefined() || payload.is_null() {
            None
        } else {
            Some(
                serde_wasm_bindgen::from_value(payload)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?,
            )
        };
        Ok(self.merge_selection(payload)?)
    }

    #[wasm_bindgen(js_name = setRowHeight)]
    pub fn js_set_row_height(&mut self, index: u32, size: f64) -> bool {
        self.set_dimension(Axis::Row, index, size)
    }

    #[wasm_bindgen(js_name = setColumnWidth)]
    pub fn js_set_column_width(&mut self, index: u32, size: f64) -> bool {
        self.set_dimension(Axis::Column, index, size)
    }

    /// Commit typed row-height text, e.g. `"600 + 50"`.
    #[wasm_bindgen(js_name = commitRowHeight)]
    pub fn js_commit_row_height(&mut self, index: u32, text: &str) -> bool {
        self.commit_dimension(Axis::Row, index, text)
    }

    /// Commit typed column-width text.
    #[wasm_bindgen(js_name = commitColumnWidth)]
    pub fn js_commit_column_width(&mut self, index: u32, text: &str) -> bool {
        self.commit_dimension(Axis::Column, index, text)
    }

    /// Hit-test: id of the cell at a point in grid coordinates.
    #[wasm_bindgen(js_name = cellAtPoint)]
    pub fn js_cell_at_point(&self, x: f64, y: f64) -> Option<String> {
        self.layout()
            .cell_at_point(&self.grid, x, y)
            .map(|id| id.to_string())
    }

    /// Current snapshot as a plain JS object.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.grid)
    }

    /// Segments, labels and cell rectangles of the current snapshot.
    #[wasm_bindgen(js_name = layoutReport)]
    pub fn js_layout_report(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.layout().report(&self.grid))
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn js_to_json(&self) -> std::result::Result<String, JsValue> {
        Ok(self.to_json()?)
    }

    #[wasm_bindgen(js_name = loadJson)]
    pub fn js_load_json(&mut self, json: &str) -> std::result::Result<(), JsValue> {
        Ok(self.load_json(json)?)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let editor = GridEditor::with_default_layout(GridConfig::default());
        let grid = editor.grid();
        assert_eq!((grid.row_count(), grid.column_count()), (2, 3));
        assert_eq!(grid.cell_count(), 4);
        let wide = grid.cell(CellId::at(0, 0)).unwrap();
        assert_eq!((wide.row_span, wide.col_span), (1, 2));
        let tall = grid.cell(CellId::at(0, 2)).unwrap();
        assert_eq!((tall.row_span, tall.col_span), (2, 1));
    }

    #[test]
    fn test_merge_clears_selection() {
        let mut editor = GridEditor::with_default_layout(GridConfig::default());
        assert!(editor.toggle_selection(CellId::at(1, 0)));
        assert!(editor.toggle_selection(CellId::at(1, 1)));
        assert!(editor.can_merge());
        assert!(editor.merge_selection(None).unwrap());
        assert!(editor.selection().is_empty());
        assert_eq!(editor.grid().cell_count(), 3);
    }

    #[test]
    fn test_failed_merge_keeps_state() {
        let mut editor = GridEditor::with_default_layout(GridConfig::default());
        editor.toggle_selection(CellId::at(1, 0));
        editor.toggle_selection(CellId::at(1, 1));
        editor.toggle_selection(CellId::at(0, 2));
        let before = editor.clone();

        let err = editor.merge_selection(None).unwrap_err();
        assert!(matches!(err, GridError::NonRectangularSelection { .. }));
        assert_eq!(editor.grid(), before.grid());
        assert_eq!(editor.selection(), before.selection());
    }

    #[test]
    fn test_merge_with_one_cell_reports_nothing_done() {
        let mut editor = GridEditor::with_default_layout(GridConfig::default());
        editor.toggle_selection(CellId::at(1, 0));
        assert!(!editor.merge_selection(None).unwrap());
        assert_eq!(editor.selection().len(), 1);
    }

    #[test]
    fn test_place_cell_reports_outcome() {
        let mut editor = GridEditor::empty(1, 2, GridConfig::default()).unwrap();
        assert!(editor.place_cell(0, 0, serde_json::json!({"type": "fixed"})));
        assert!(!editor.place_cell(0, 0, Sash::Null));
        assert_eq!(
            editor.grid().cell(CellId::at(0, 0)).unwrap().payload["type"],
            "fixed"
        );
    }

    #[test]
    fn test_oversized_editor_is_rejected() {
        let err = GridEditor::empty(4_000_000_000, 1, GridConfig::default()).unwrap_err();
        assert_eq!(
            err,
            GridError::TooLarge {
                rows: 4_000_000_000,
                cols: 1,
                max: MAX_TRACKS
            }
        );
        assert!(GridEditor::empty(1, MAX_TRACKS + 1, GridConfig::default()).is_err());
        assert!(GridEditor::empty(MAX_TRACKS, 1, GridConfig::default()).is_ok());
    }

    #[test]
    fn test_add_row_stops_at_limit() {
        let mut editor = GridEditor::empty(MAX_TRACKS, 1, GridConfig::default()).unwrap();
        editor.add_row();
        editor.add_column();
        assert_eq!(editor.grid().row_count(), MAX_TRACKS);
        assert_eq!(editor.grid().column_count(), 2);
    }

    #[test]
    fn test_commit_dimension() {
        let mut editor = GridEditor::empty(2, 2, GridConfig::default()).unwrap();
        assert!(editor.commit_dimension(Axis::Row, 0, "600 + 50"));
        assert!(!editor.commit_dimension(Axis::Row, 1, "alert(1)"));
        assert!(editor.set_dimension(Axis::Column, 1, 450.0));
        assert!(!editor.set_dimension(Axis::Column, 1, -1.0));
        assert_eq!(editor.grid().row_heights(), &[650.0, 1.0]);
        assert_eq!(editor.grid().column_widths(), &[1.0, 450.0]);
    }

    #[test]
    fn test_load_json_keeps_config_and_clears_selection() {
        let config = GridConfig {
            default_row_height: 300.0,
            ..GridConfig::default()
        };
        let mut editor = GridEditor::with_default_layout(config);
        let json = editor.to_json().unwrap();
        editor.toggle_selection(CellId::at(1, 0));

        editor.load_json(&json).unwrap();
        assert!(editor.selection().is_empty());
        assert_eq!(editor.grid().config().default_row_height, 300.0);
        editor.add_row();
        assert_eq!(editor.grid().row_heights(), &[300.0, 300.0, 300.0]);
    }
}
