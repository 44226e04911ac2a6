//! Structured error types for sashgrid.
//!
//! Most rejected edits are silent no-ops; only the failures a caller has to
//! surface to the user end up here.

use crate::types::CellId;

/// Bounding rectangle of a selection, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows {}..={}, cols {}..={}",
            self.min_row, self.max_row, self.min_col, self.max_col
        )
    }
}

/// All errors that can occur while editing a grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The selected cells do not exactly cover their bounding rectangle.
    #[error("Non-rectangular selection: ({row}, {col}) in {bounds} is not covered by the selection")]
    NonRectangularSelection { bounds: Bounds, row: u32, col: u32 },

    /// A selected cell id is not part of the grid.
    #[error("Unknown cell: {0}")]
    UnknownCell(CellId),

    /// An imported snapshot breaks a grid invariant.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Requested grid exceeds the editor's row/column limit.
    #[error("Grid too large: {rows}x{cols} exceeds {max} rows or columns")]
    TooLarge { rows: u32, cols: u32, max: u32 },

    /// Snapshot (de)serialization failure.
    #[error("JSON: {0}")]
    Json(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
