//! Test fixtures for building grids with known layouts.
//!
//! # Example
//!
//! ```rust
//! use fixtures::GridBuilder;
//!
//! let grid = GridBuilder::new(2, 3)
//!     .cell(0, 0, 1, 2)
//!     .single(1, 0)
//!     .build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use sashgrid::{CellId, Grid, Selection};

/// Payload used by fixture grids: the anchor the cell was placed at.
pub type Tag = (u32, u32);

/// Builder for grids with spanning cells.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    row_heights: Vec<f64>,
    column_widths: Vec<f64>,
    cells: Vec<(u32, u32, u32, u32)>,
}

impl GridBuilder {
    /// `rows` x `cols` of unit size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_heights: vec![1.0; rows],
            column_widths: vec![1.0; cols],
            cells: Vec::new(),
        }
    }

    pub fn row_heights(mut self, sizes: &[f64]) -> Self {
        self.row_heights = sizes.to_vec();
        self
    }

    pub fn column_widths(mut self, sizes: &[f64]) -> Self {
        self.column_widths = sizes.to_vec();
        self
    }

    /// Cell anchored at `(row, col)` spanning `row_span` x `col_span`.
    pub fn cell(mut self, row: u32, col: u32, row_span: u32, col_span: u32) -> Self {
        self.cells.push((row, col, row_span, col_span));
        self
    }

    pub fn single(self, row: u32, col: u32) -> Self {
        self.cell(row, col, 1, 1)
    }

    /// Fill every position with a 1x1 cell.
    pub fn filled(mut self) -> Self {
        for r in 0..self.row_heights.len() as u32 {
            for c in 0..self.column_widths.len() as u32 {
                self.cells.push((r, c, 1, 1));
            }
        }
        self
    }

    /// Build the grid; panics if a fixture cell was rejected.
    pub fn build(self) -> Grid<Tag> {
        let expected = self.cells.len();
        let grid = self.cells.iter().fold(
            Grid::with_dimensions(self.row_heights, self.column_widths),
            |grid, &(r, c, rs, cs)| grid.place_spanning_cell(r, c, rs, cs, (r, c)),
        );
        assert_eq!(grid.cell_count(), expected, "fixture cells overlap");
        grid
    }
}

/// The builder's default 2x3 layout:
///
/// ```text
/// +-------+---+
/// | (0,0) |   |
/// +---+---+0,2|
/// |1,0|1,1|   |
/// +---+---+---+
/// ```
pub fn default_layout() -> Grid<Tag> {
    GridBuilder::new(2, 3)
        .cell(0, 0, 1, 2)
        .cell(0, 2, 2, 1)
        .single(1, 0)
        .single(1, 1)
        .build()
}

/// Toggle the given anchors in order.
pub fn select<P>(grid: &Grid<P>, anchors: &[(u32, u32)]) -> Selection {
    anchors
        .iter()
        .fold(Selection::new(), |sel, &(r, c)| sel.toggle(grid, CellId::at(r, c)))
}
