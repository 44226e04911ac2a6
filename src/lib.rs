//! sashgrid - grid engine for the window-unit builder
//!
//! The computational core behind the builder's unit editor, usable from
//! Rust or from the browser via WebAssembly:
//! - A rectangular grid of spannable cells with non-overlap guarantees
//! - Adjacency-constrained multi-selection
//! - Merging a selection only when it exactly fills a rectangle
//! - Prefix-sum segment positions for dimension labels and hit testing
//! - Safe arithmetic for typed dimensions (`100 + 50`, no code execution)
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridEditor } from 'sashgrid';
//! await init();
//! const editor = GridEditor.withDefaultLayout();
//! editor.toggleSelection('cell-1-0');
//! editor.toggleSelection('cell-1-1');
//! editor.mergeSelection();
//! editor.commitRowHeight(0, '600 + 50');
//! const report = editor.layoutReport();
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use sashgrid::{CellId, Grid, Selection};
//!
//! let grid = Grid::with_dimensions(vec![1.0; 2], vec![1.0; 2])
//!     .place_cell(0, 0, ())
//!     .place_cell(0, 1, ());
//! let selection = Selection::new()
//!     .toggle(&grid, CellId::at(0, 0))
//!     .toggle(&grid, CellId::at(0, 1));
//! let merged = grid.merge(&selection, None).unwrap();
//! assert_eq!(merged.cell(CellId::at(0, 0)).map(|c| c.col_span), Some(2));
//! ```

pub mod editor;
pub mod error;
pub mod expression;
pub mod grid;
pub mod layout;
pub mod types;

use wasm_bindgen::prelude::*;

pub use editor::{Axis, GridEditor, Sash, MAX_TRACKS};
pub use error::{Bounds, GridError, Result};
pub use expression::{evaluate, try_evaluate, ExprError};
pub use grid::Grid;
pub use layout::{compute_segments, CellRect, DimensionLabel, GridLayout, LayoutReport, Segments};
pub use types::*;

/// Evaluate a typed dimension such as `"100 + 50"`.
///
/// Returns `NaN` for anything that is not a plain `+ - * /` expression.
#[must_use]
#[wasm_bindgen(js_name = evaluateExpression)]
pub fn evaluate_expression(text: &str) -> f64 {
    expression::evaluate(text)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
