//! Dimension edits typed by the user.
//!
//! Turns free-text input into a validated row height or column width.

use crate::expression;
use crate::grid::Grid;

/// Which size sequence an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// Apply a typed dimension to the grid.
///
/// The text goes through the expression evaluator (`"600 + 50"` works).
/// Returns `None` when the text does not evaluate, the index is out of
/// range, or the size is rejected by the grid's config.
pub(crate) fn apply_dimension_input<P: Clone>(
    grid: &Grid<P>,
    axis: Axis,
    index: u32,
    text: &str,
) -> Option<Grid<P>> {
    let size = match expression::try_evaluate(text) {
        Ok(size) => size,
        Err(e) => {
            tracing::debug!(?axis, index, input = text, error = %e, "ignoring dimension input");
            return None;
        }
    };
    apply_dimension(grid, axis, index, size)
}

/// Apply a numeric dimension; `None` if the grid rejected it.
pub(crate) fn apply_dimension<P: Clone>(
    grid: &Grid<P>,
    axis: Axis,
    index: u32,
    size: f64,
) -> Option<Grid<P>> {
    let count = match axis {
        Axis::Row => grid.row_count(),
        Axis::Column => grid.column_count(),
    };
    if index >= count || !grid.config().accepts(size) {
        tracing::debug!(?axis, index, size, "ignoring dimension update");
        return None;
    }
    Some(match axis {
        Axis::Row => grid.update_row_height(index, size),
        Axis::Column => grid.update_column_width(index, size),
    })
}
