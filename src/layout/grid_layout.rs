//! Cell geometry computed from a grid snapshot.
//!
//! A `GridLayout` is built from one snapshot and never updated; build a new
//! one after every edit.

use serde::Serialize;

use super::{DimensionLabel, Segments};
use crate::grid::Grid;
use crate::types::{Cell, CellId};

/// Row and column boundaries of one grid snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub rows: Segments,
    pub columns: Segments,
}

/// Rectangle covered by a cell, spans included
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRect {
    pub id: CellId,
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything a renderer needs to draw one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub width: f64,
    pub height: f64,
    pub rows: Segments,
    pub columns: Segments,
    pub row_labels: Vec<DimensionLabel>,
    pub column_labels: Vec<DimensionLabel>,
    pub cells: Vec<CellRect>,
}

impl GridLayout {
    pub fn new<P>(grid: &Grid<P>) -> Self {
        Self {
            rows: grid.row_segments(),
            columns: grid.column_segments(),
        }
    }

    /// Get total width of the grid
    pub fn total_width(&self) -> f64 {
        self.columns.total()
    }

    /// Get total height of the grid
    pub fn total_height(&self) -> f64 {
        self.rows.total()
    }

    /// Bounds of `cell`, merged spans included.
    ///
    /// `None` if the span reaches past the last row or column.
    pub fn cell_rect<P>(&self, cell: &Cell<P>) -> Option<CellRect> {
        let (x, width) = self.columns.extent(cell.col, cell.col_span)?;
        let (y, height) = self.rows.extent(cell.row, cell.row_span)?;
        Some(CellRect {
            id: cell.id,
            x,
            y,
            width,
            height,
        })
    }

    /// Rectangles for every cell of `grid`, in anchor order.
    pub fn cell_rects<P>(&self, grid: &Grid<P>) -> Vec<CellRect> {
        grid.cells().filter_map(|cell| self.cell_rect(cell)).collect()
    }

    /// Hit-test: which cell covers the point `(x, y)`?
    pub fn cell_at_point<P>(&self, grid: &Grid<P>, x: f64, y: f64) -> Option<CellId> {
        let row = self.rows.index_at(y)?;
        let col = self.columns.index_at(x)?;
        grid.cell_at(row, col).map(|cell| cell.id)
    }

    /// Label placement for the row heights.
    pub fn row_labels(&self) -> Vec<DimensionLabel> {
        self.rows.labels()
    }

    /// Label placement for the column widths.
    pub fn column_labels(&self) -> Vec<DimensionLabel> {
        self.columns.labels()
    }

    /// Segments, labels and cell rectangles for `grid` in one value.
    pub fn report<P>(&self, grid: &Grid<P>) -> LayoutReport {
        LayoutReport {
            width: self.total_width(),
            height: self.total_height(),
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            row_labels: self.row_labels(),
            column_labels: self.column_labels(),
            cells: self.cell_rects(grid),
        }
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

    fn window() -> Grid<()> {
        Grid::with_dimensions(vec![600.0, 400.0], vec![300.0, 300.0, 500.0])
            .place_spanning_cell(0, 0, 1, 2, ())
            .place_spanning_cell(0, 2, 2, 1, ())
            .place_cell(1, 0, ())
    }

    #[test]
    fn test_basic_layout() {
        let layout = GridLayout::new(&window());
        assert_eq!(layout.total_width(), 1100.0);
        assert_eq!(layout.total_height(), 1000.0);
    }

    #[test]
    fn test_cell_rect_includes_span() {
        let grid = window();
        let layout = GridLayout::new(&grid);

        let wide = layout.cell_rect(grid.cell(CellId::at(0, 0)).unwrap()).unwrap();
        assert_eq!((wide.x, wide.y, wide.width, wide.height), (0.0, 0.0, 600.0, 600.0));

        let tall = layout.cell_rect(grid.cell(CellId::at(0, 2)).unwrap()).unwrap();
        assert_eq!((tall.x, tall.y, tall.width, tall.height), (600.0, 0.0, 500.0, 1000.0));

        let single = layout.cell_rect(grid.cell(CellId::at(1, 0)).unwrap()).unwrap();
        assert_eq!((single.x, single.y), (0.0, 600.0));
    }

    #[test]
    fn test_cell_rects_skip_nothing_in_bounds() {
        let grid = window();
        let layout = GridLayout::new(&grid);
        assert_eq!(layout.cell_rects(&grid).len(), 3);
    }

    #[test]
    fn test_cell_at_point() {
        let grid = window();
        let layout = GridLayout::new(&grid);
        assert_eq!(layout.cell_at_point(&grid, 450.0, 10.0), Some(CellId::at(0, 0)));
        assert_eq!(layout.cell_at_point(&grid, 700.0, 900.0), Some(CellId::at(0, 2)));
        // Empty position
        assert_eq!(layout.cell_at_point(&grid, 450.0, 700.0), None);
        // Outside the grid
        assert_eq!(layout.cell_at_point(&grid, 2000.0, 10.0), None);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let grid = window();
        let report = GridLayout::new(&grid).report(&grid);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["width"], 1100.0);
        assert_eq!(json["rowLabels"][0]["position"], 300.0);
        assert_eq!(json["cells"][1]["id"], "cell-0-2");
        assert_eq!(json["cells"][1]["height"], 1000.0);
    }

    #[test]
    fn test_labels() {
        let layout = GridLayout::new(&window());
        let rows = layout.row_labels();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].position, 800.0);
        assert_eq!(layout.column_labels()[2].size, 500.0);
    }
}
