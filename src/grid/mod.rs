//! Grid model: row heights, column widths and spannable cells.
//!
//! A `Grid` is an immutable snapshot. Every edit borrows the current
//! snapshot and returns a new one, so a reader holding an older grid never
//! sees it change. Rejected edits return an unchanged copy.

mod merge;
mod snapshot;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::{compute_segments, Segments};
use crate::types::{Cell, CellId, GridConfig};

/// One rectangular grid of non-overlapping, spannable cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid<P> {
    row_heights: Vec<f64>,
    column_widths: Vec<f64>,
    cells: BTreeMap<CellId, Cell<P>>,
    #[serde(skip)]
    config: GridConfig,
}

impl<P> Default for Grid<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Grid<P> {
    /// Empty grid: no rows, no columns, no cells.
    pub fn new() -> Self {
        Self {
            row_heights: Vec::new(),
            column_widths: Vec::new(),
            cells: BTreeMap::new(),
            config: GridConfig::default(),
        }
    }

    /// Grid with the given row heights and column widths and no cells.
    ///
    /// Sizes are taken as given; use the update operations for validated edits.
    pub fn with_dimensions(row_heights: Vec<f64>, column_widths: Vec<f64>) -> Self {
        Self {
            row_heights,
            column_widths,
            cells: BTreeMap::new(),
            config: GridConfig::default(),
        }
    }

    /// Replace the sizing rules used by later edits.
    #[must_use]
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        u32::try_from(self.row_heights.len()).unwrap_or(u32::MAX)
    }

    /// Number of columns
    pub fn column_count(&self) -> u32 {
        u32::try_from(self.column_widths.len()).unwrap_or(u32::MAX)
    }

    /// All cells, ordered by anchor (row-major).
    pub fn cells(&self) -> impl Iterator<Item = &Cell<P>> {
        self.cells.values()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Look up a cell by id.
    pub fn cell(&self, id: CellId) -> Option<&Cell<P>> {
        self.cells.get(&id)
    }

    /// The cell whose span covers `(row, col)`, if any.
    ///
    /// Linear scan; grids are edited by hand and stay small.
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&Cell<P>> {
        self.cells.values().find(|cell| cell.covers(row, col))
    }

    /// True if some cell's span covers `(row, col)`.
    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.cell_at(row, col).is_some()
    }

    /// Boundary positions and sizes of the rows.
    pub fn row_segments(&self) -> Segments {
        compute_segments(&self.row_heights)
    }

    /// Boundary positions and sizes of the columns.
    pub fn column_segments(&self) -> Segments {
        compute_segments(&self.column_widths)
    }

    fn in_bounds(&self, row: u32, col: u32, row_span: u32, col_span: u32) -> bool {
        row_span >= 1
            && col_span >= 1
            && row
                .checked_add(row_span)
                .is_some_and(|end| end <= self.row_count())
            && col
                .checked_add(col_span)
                .is_some_and(|end| end <= self.column_count())
    }
}

impl<P: Clone> Grid<P> {
    /// Append one row of the configured default height.
    #[must_use]
    pub fn add_row(&self) -> Self {
        let mut next = self.clone();
        next.row_heights.push(self.config.default_row_height);
        next
    }

    /// Append one column of the configured default width.
    #[must_use]
    pub fn add_column(&self) -> Self {
        let mut next = self.clone();
        next.column_widths.push(self.config.default_column_width);
        next
    }

    /// Place a 1x1 cell at `(row, col)`.
    ///
    /// Occupied or out-of-range positions are ignored.
    #[must_use]
    pub fn place_cell(&self, row: u32, col: u32, payload: P) -> Self {
        self.place_spanning_cell(row, col, 1, 1, payload)
    }

    /// Place a cell covering `row_span` x `col_span` from `(row, col)`.
    ///
    /// Ignored if the span is empty, leaves the grid, or touches any occupied position.
    #[must_use]
    pub fn place_spanning_cell(
        &self,
        row: u32,
        col: u32,
        row_span: u32,
        col_span: u32,
        payload: P,
    ) -> Self {
        if !self.in_bounds(row, col, row_span, col_span) {
            tracing::debug!(row, col, row_span, col_span, "ignoring placement outside grid");
            return self.clone();
        }
        let cell = Cell::spanning(row, col, row_span, col_span, payload);
        if self.cells.values().any(|other| other.overlaps(&cell)) {
            tracing::debug!(row, col, "ignoring placement on occupied position");
            return self.clone();
        }
        let mut next = self.clone();
        next.cells.insert(cell.id, cell);
        next
    }

    /// Replace the height of row `index`.
    ///
    /// Ignored if `index` is out of range or the size is rejected by the config.
    #[must_use]
    pub fn update_row_height(&self, index: u32, size: f64) -> Self {
        let mut next = self.clone();
        if !set_dimension(&mut next.row_heights, &self.config, index, size) {
            tracing::debug!(index, size, "ignoring row height update");
        }
        next
    }

    /// Replace the width of column `index`.
    ///
    /// Ignored if `index` is out of range or the size is rejected by the config.
    #[must_use]
    pub fn update_column_width(&self, index: u32, size: f64) -> Self {
        let mut next = self.clone();
        if !set_dimension(&mut next.column_widths, &self.config, index, size) {
            tracing::debug!(index, size, "ignoring column width update");
        }
        next
    }
}

fn set_dimension(sizes: &mut [f64], config: &GridConfig, index: u32, size: f64) -> bool {
    if !config.accepts(size) {
        return false;
    }
    match sizes.get_mut(index as usize) {
        Some(slot) => {
            *slot = size;
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn two_by_two() -> Grid<u8> {
        Grid::with_dimensions(vec![10.0, 20.0], vec![30.0, 40.0])
    }

    #[test]
    fn test_add_row_and_column_use_default_size() {
        let grid: Grid<u8> = Grid::new().add_row().add_row().add_column();
        assert_eq!(grid.row_heights(), &[1.0, 1.0]);
        assert_eq!(grid.column_widths(), &[1.0]);
    }

    #[test]
    fn test_add_row_uses_configured_size() {
        let config = GridConfig {
            default_row_height: 600.0,
            default_column_width: 450.0,
            ..GridConfig::default()
        };
        let grid: Grid<u8> = Grid::new().with_config(config).add_row().add_column();
        assert_eq!(grid.row_heights(), &[600.0]);
        assert_eq!(grid.column_widths(), &[450.0]);
    }

    #[test]
    fn test_new_rows_do_not_stretch_existing_cells() {
        let grid = two_by_two().place_cell(1, 1, 7).add_row().add_column();
        let cell = grid.cell(CellId::at(1, 1)).unwrap();
        assert_eq!((cell.row_span, cell.col_span), (1, 1));
        assert!(!grid.is_occupied(2, 2));
    }

    #[test]
    fn test_place_cell() {
        let grid = two_by_two().place_cell(0, 1, 7);
        assert_eq!(grid.cell_count(), 1);
        let cell = grid.cell(CellId::at(0, 1)).unwrap();
        assert_eq!(cell.payload, 7);
        assert!(grid.is_occupied(0, 1));
        assert!(!grid.is_occupied(0, 0));
    }

    #[test]
    fn test_place_on_occupied_is_ignored() {
        let grid = two_by_two().place_spanning_cell(0, 0, 2, 1, 1);
        let again = grid.place_cell(1, 0, 2);
        assert_eq!(again, grid);
        assert_eq!(again.cell_at(1, 0).unwrap().payload, 1);
    }

    #[test]
    fn test_place_outside_grid_is_ignored() {
        let grid = two_by_two();
        assert_eq!(grid.place_cell(2, 0, 1).cell_count(), 0);
        assert_eq!(grid.place_spanning_cell(1, 1, 1, 2, 1).cell_count(), 0);
        assert_eq!(grid.place_spanning_cell(0, 0, 0, 1, 1).cell_count(), 0);
    }

    #[test]
    fn test_spanning_placement_overlapping_existing_cell_is_ignored() {
        let grid = two_by_two().place_cell(1, 1, 1);
        let next = grid.place_spanning_cell(0, 0, 2, 2, 2);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let before = two_by_two();
        let after = before.place_cell(0, 0, 1).update_row_height(0, 99.0);
        assert_eq!(before.cell_count(), 0);
        assert_eq!(before.row_heights()[0], 10.0);
        assert_eq!(after.row_heights()[0], 99.0);
    }

    #[test]
    fn test_dimension_updates_are_validated() {
        let grid = two_by_two();
        assert_eq!(grid.update_column_width(1, 55.5).column_widths(), &[30.0, 55.5]);
        assert_eq!(grid.update_column_width(2, 55.5), grid);
        assert_eq!(grid.update_row_height(0, 0.0), grid);
        assert_eq!(grid.update_row_height(0, -5.0), grid);
        assert_eq!(grid.update_row_height(0, f64::NAN).row_heights(), &[10.0, 20.0]);
        assert_eq!(grid.update_row_height(0, f64::INFINITY), grid);
    }

    #[test]
    fn test_cell_at_finds_owner_of_spanned_position() {
        let grid = Grid::with_dimensions(vec![1.0; 2], vec![1.0; 3])
            .place_spanning_cell(0, 0, 1, 2, 'a')
            .place_spanning_cell(0, 2, 2, 1, 'b');
        assert_eq!(grid.cell_at(0, 1).unwrap().payload, 'a');
        assert_eq!(grid.cell_at(1, 2).unwrap().payload, 'b');
        assert!(grid.cell_at(1, 0).is_none());
    }

    #[test]
    fn test_segments_follow_dimensions() {
        let grid = two_by_two();
        assert_eq!(grid.row_segments().positions, vec![0.0, 10.0, 30.0]);
        assert_eq!(grid.column_segments().total(), 70.0);
    }
}
