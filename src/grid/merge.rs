//! Rectangle merge of a selection into one spanning cell.

use super::Grid;
use crate::error::{Bounds, GridError, Result};
use crate::types::{Cell, Selection};

impl<P> Grid<P> {
    /// Bounding rectangle of the selected cells' spans.
    ///
    /// `Ok(None)` for an empty selection.
    pub fn selection_bounds(&self, selection: &Selection) -> Result<Option<Bounds>> {
        let mut bounds: Option<Bounds> = None;
        for &id in selection {
            let cell = self.cell(id).ok_or(GridError::UnknownCell(id))?;
            bounds = Some(match bounds {
                None => Bounds {
                    min_row: cell.row,
                    min_col: cell.col,
                    max_row: cell.last_row(),
                    max_col: cell.last_col(),
                },
                Some(b) => Bounds {
                    min_row: b.min_row.min(cell.row),
                    min_col: b.min_col.min(cell.col),
                    max_row: b.max_row.max(cell.last_row()),
                    max_col: b.max_col.max(cell.last_col()),
                },
            });
        }
        Ok(bounds)
    }

    /// Check that every position inside the selection's bounding rectangle
    /// is owned by a selected cell.
    ///
    /// Returns the rectangle on success.
    pub fn check_rectangular(&self, selection: &Selection) -> Result<Option<Bounds>> {
        let Some(bounds) = self.selection_bounds(selection)? else {
            return Ok(None);
        };
        for row in bounds.min_row..=bounds.max_row {
            for col in bounds.min_col..=bounds.max_col {
                let owned = self
                    .cell_at(row, col)
                    .is_some_and(|owner| selection.contains(owner.id));
                if !owned {
                    return Err(GridError::NonRectangularSelection { bounds, row, col });
                }
            }
        }
        Ok(Some(bounds))
    }

    /// True if `merge` would succeed and change the grid.
    pub fn can_merge(&self, selection: &Selection) -> bool {
        selection.len() > 1 && self.check_rectangular(selection).is_ok()
    }
}

impl<P: Clone + Default> Grid<P> {
    /// Collapse the selected cells into one cell spanning their bounding rectangle.
    ///
    /// Selections of fewer than two cells return the grid unchanged. If the
    /// selected spans do not cover their bounding rectangle exactly, nothing
    /// is touched and `GridError::NonRectangularSelection` is returned.
    ///
    /// The merged cell is anchored at the rectangle's top-left corner and
    /// carries `payload`, or `P::default()` when none is given.
    pub fn merge(&self, selection: &Selection, payload: Option<P>) -> Result<Self> {
        if selection.len() <= 1 {
            return Ok(self.clone());
        }

        let bounds = match self.check_rectangular(selection) {
            Ok(Some(bounds)) => bounds,
            Ok(None) => return Ok(self.clone()),
            Err(e) => {
                tracing::warn!(error = %e, "merge rejected");
                return Err(e);
            }
        };

        let mut next = self.clone();
        for id in selection {
            next.cells.remove(id);
        }
        let merged = Cell::spanning(
            bounds.min_row,
            bounds.min_col,
            bounds.max_row - bounds.min_row + 1,
            bounds.max_col - bounds.min_col + 1,
            payload.unwrap_or_default(),
        );
        tracing::info!(id = %merged.id, row_span = merged.row_span, col_span = merged.col_span, absorbed = selection.len(), "merged cells");
        next.cells.insert(merged.id, merged);
        Ok(next)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::CellId;

    /// 2x3 layout: wide cell on top-left, tall cell on the right, two singles below.
    fn default_layout() -> Grid<u32> {
        Grid::with_dimensions(vec![1.0; 2], vec![1.0; 3])
            .place_spanning_cell(0, 0, 1, 2, 1)
            .place_spanning_cell(0, 2, 2, 1, 2)
            .place_cell(1, 0, 3)
            .place_cell(1, 1, 4)
    }

    fn select(grid: &Grid<u32>, ids: &[(u32, u32)]) -> Selection {
        ids.iter()
            .fold(Selection::new(), |sel, &(r, c)| sel.toggle(grid, CellId::at(r, c)))
    }

    #[test]
    fn test_merge_bottom_row() {
        let grid = default_layout();
        let sel = select(&grid, &[(1, 0), (1, 1)]);
        let merged = grid.merge(&sel, Some(9)).unwrap();

        assert_eq!(merged.cell_count(), 3);
        let cell = merged.cell(CellId::at(1, 0)).unwrap();
        assert_eq!((cell.row_span, cell.col_span), (1, 2));
        assert_eq!(cell.payload, 9);
        assert!(merged.cell(CellId::at(1, 1)).is_none());
        assert_eq!(merged.cell(CellId::at(0, 0)), grid.cell(CellId::at(0, 0)));
        assert_eq!(merged.cell(CellId::at(0, 2)), grid.cell(CellId::at(0, 2)));
    }

    #[test]
    fn test_merge_with_l_shape_fails_and_leaves_grid() {
        let grid = default_layout();
        let sel = select(&grid, &[(1, 0), (1, 1), (0, 2)]);
        assert_eq!(sel.len(), 3);

        let err = grid.merge(&sel, None).unwrap_err();
        match err {
            GridError::NonRectangularSelection { bounds, row, col } => {
                assert_eq!(
                    bounds,
                    Bounds {
                        min_row: 0,
                        min_col: 0,
                        max_row: 1,
                        max_col: 2
                    }
                );
                assert_eq!((row, col), (0, 0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!grid.can_merge(&sel));
    }

    #[test]
    fn test_merge_whole_grid() {
        let grid = default_layout();
        let sel = select(&grid, &[(1, 0), (1, 1), (0, 2), (0, 0)]);
        let merged = grid.merge(&sel, None).unwrap();
        assert_eq!(merged.cell_count(), 1);
        let cell = merged.cell(CellId::at(0, 0)).unwrap();
        assert_eq!((cell.row_span, cell.col_span), (2, 3));
        assert_eq!(cell.payload, 0);
    }

    #[test]
    fn test_single_cell_merge_is_noop() {
        let grid = default_layout();
        let sel = select(&grid, &[(1, 0)]);
        assert_eq!(grid.merge(&sel, Some(5)).unwrap(), grid);
        assert!(!grid.can_merge(&sel));
    }

    #[test]
    fn test_gap_in_rectangle_fails() {
        let grid = Grid::with_dimensions(vec![1.0; 2], vec![1.0; 2])
            .place_cell(0, 0, 1)
            .place_cell(0, 1, 2)
            .place_cell(1, 0, 3);
        let sel = select(&grid, &[(0, 0), (0, 1), (1, 0)]);
        let err = grid.merge(&sel, None).unwrap_err();
        assert!(matches!(
            err,
            GridError::NonRectangularSelection { row: 1, col: 1, .. }
        ));
    }

    #[test]
    fn test_unknown_selected_cell_fails() {
        let grid = default_layout();
        let sel = select(&grid, &[(1, 0), (1, 1)]);
        let merged = grid.merge(&sel, None).unwrap();
        // (1, 1) no longer exists in the merged grid
        assert_eq!(
            merged.merge(&sel, None).unwrap_err(),
            GridError::UnknownCell(CellId::at(1, 1))
        );
    }

    #[test]
    fn test_merged_cell_id_matches_anchor() {
        let grid = default_layout();
        let sel = select(&grid, &[(1, 0), (1, 1)]);
        let bounds = grid.check_rectangular(&sel).unwrap().unwrap();
        let merged = grid.merge(&sel, None).unwrap();
        assert!(merged
            .cell(CellId::at(bounds.min_row, bounds.min_col))
            .is_some());
    }
}
