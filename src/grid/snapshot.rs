//! JSON import/export of grid snapshots.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Grid;
use crate::error::{GridError, Result};
use crate::types::CellId;

impl<P: Serialize> Grid<P> {
    /// Serialize the snapshot (dimensions and cells) to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<P: DeserializeOwned> Grid<P> {
    /// Load a snapshot from JSON, rejecting any that breaks a grid invariant.
    ///
    /// The loaded grid uses the default config.
    pub fn from_json(json: &str) -> Result<Self> {
        let grid: Self = serde_json::from_str(json)?;
        grid.validate()?;
        Ok(grid)
    }
}

impl<P> Grid<P> {
    /// Check sizes, spans, bounds, ids and pairwise non-overlap.
    ///
    /// Ids must match both their map key and the cell's anchor.
    pub fn validate(&self) -> Result<()> {
        for (axis, sizes) in [("row", &self.row_heights), ("column", &self.column_widths)] {
            if let Some((index, size)) = sizes
                .iter()
                .enumerate()
                .find(|&(_, &s)| !(s.is_finite() && s > 0.0))
            {
                return Err(GridError::InvalidGrid(format!(
                    "{axis} {index} has invalid size {size}"
                )));
            }
        }

        let cells: Vec<_> = self.cells.iter().collect();
        for (i, &(key, cell)) in cells.iter().enumerate() {
            if *key != cell.id {
                return Err(GridError::InvalidGrid(format!(
                    "cell stored under {key} has id {}",
                    cell.id
                )));
            }
            if cell.id != CellId::at(cell.row, cell.col) {
                return Err(GridError::InvalidGrid(format!(
                    "{} is anchored at ({}, {})",
                    cell.id, cell.row, cell.col
                )));
            }
            if !self.in_bounds(cell.row, cell.col, cell.row_span, cell.col_span) {
                return Err(GridError::InvalidGrid(format!(
                    "{} spans outside the {}x{} grid",
                    cell.id,
                    self.row_count(),
                    self.column_count()
                )));
            }
            if let Some((_, other)) = cells.iter().skip(i + 1).find(|(_, o)| o.overlaps(cell)) {
                return Err(GridError::InvalidGrid(format!(
                    "{} overlaps {}",
                    cell.id, other.id
                )));
            }
        }
        Ok(())
    }
}
