//! Merge tests: the default-layout scenario and the rectangle law.
//!
//! A merge succeeds exactly when the selected spans tile their bounding
//! rectangle. Any other selection fails and leaves the grid untouched.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

mod common;
mod fixtures;

use common::{assert_grid_invariants, default_layout, select, GridBuilder, Lcg};
use proptest::prelude::*;
use sashgrid::{Bounds, CellId, Grid, GridError, Selection};

// ============================================================================
// DEFAULT LAYOUT SCENARIO
// ============================================================================

#[test]
fn test_merge_bottom_pair_of_default_layout() {
    let grid = default_layout();
    let sel = select(&grid, &[(1, 0), (1, 1)]);
    assert_eq!(sel.len(), 2);

    let merged = grid.merge(&sel, None).unwrap();
    let cell = merged.cell(CellId::at(1, 0)).unwrap();
    assert_eq!((cell.row, cell.col, cell.row_span, cell.col_span), (1, 0, 1, 2));
    assert_eq!(merged.cell(CellId::at(0, 0)), grid.cell(CellId::at(0, 0)));
    assert_eq!(merged.cell(CellId::at(0, 2)), grid.cell(CellId::at(0, 2)));
    assert_eq!(merged.cell_count(), 3);
    assert_grid_invariants(&merged);
}

#[test]
fn test_including_tall_cell_is_not_rectangular() {
    let grid = default_layout();
    let sel = select(&grid, &[(1, 0), (1, 1), (0, 2)]);
    assert_eq!(sel.len(), 3, "tall cell is adjacent and must be selectable");

    let before = grid.to_json().unwrap();
    let err = grid.merge(&sel, None).unwrap_err();
    assert!(matches!(err, GridError::NonRectangularSelection { .. }));
    assert!(err.to_string().starts_with("Non-rectangular selection"));
    assert_eq!(grid.to_json().unwrap(), before);
}

#[test]
fn test_merging_spanning_cells() {
    // Two tall cells side by side become one 2x2 cell
    let grid = GridBuilder::new(2, 2).cell(0, 0, 2, 1).cell(0, 1, 2, 1).build();
    let sel = select(&grid, &[(0, 1), (0, 0)]);
    let merged = grid.merge(&sel, Some((7, 7))).unwrap();
    let cell = merged.cell(CellId::at(0, 0)).unwrap();
    assert_eq!((cell.row_span, cell.col_span), (2, 2));
    assert_eq!(cell.payload, (7, 7));
}

#[test]
fn test_bounds_reach_span_ends() {
    let grid = default_layout();
    let sel = select(&grid, &[(0, 0), (0, 2)]);
    assert_eq!(
        grid.selection_bounds(&sel).unwrap(),
        Some(Bounds {
            min_row: 0,
            min_col: 0,
            max_row: 1,
            max_col: 2
        })
    );
}

#[test]
fn test_merge_then_merge_again() {
    let grid = GridBuilder::new(2, 2).filled().build();
    let top = grid.merge(&select(&grid, &[(0, 0), (0, 1)]), None).unwrap();
    let bottom = top.merge(&select(&top, &[(1, 0), (1, 1)]), None).unwrap();
    let all = bottom
        .merge(&select(&bottom, &[(0, 0), (1, 0)]), None)
        .unwrap();
    assert_eq!(all.cell_count(), 1);
    let cell = all.cell(CellId::at(0, 0)).unwrap();
    assert_eq!((cell.row_span, cell.col_span), (2, 2));
}

#[test]
fn test_single_cell_cannot_pose_as_a_pair() {
    let grid = GridBuilder::new(1, 1).single(0, 0).build();
    assert!(serde_json::from_str::<Selection>(r#"["cell-0-0","cell-0-0"]"#).is_err());

    // A one-id selection leaves the cell and its payload alone
    let sel: Selection = serde_json::from_str(r#"["cell-0-0"]"#).unwrap();
    let same = grid.merge(&sel, Some((7, 7))).unwrap();
    assert_eq!(same.cell(CellId::at(0, 0)).unwrap().payload, (0, 0));
    assert!(!grid.can_merge(&sel));
}

// ============================================================================
// RECTANGLE LAW
// ============================================================================

/// Toggle cells of `wanted` until the selection stops growing.
fn select_connected(grid: &Grid<(u32, u32)>, wanted: &[CellId]) -> Selection {
    let mut sel = Selection::new();
    loop {
        let before = sel.len();
        for &id in wanted {
            if !sel.contains(id) {
                sel = sel.toggle(grid, id);
            }
        }
        if sel.len() == before {
            return sel;
        }
    }
}

fn check_rectangle_law(seed: u64) {
    let mut rng = Lcg::new(seed);
    let rows = 1 + rng.below(4) as usize;
    let cols = 1 + rng.below(4) as usize;
    let grid = GridBuilder::new(rows, cols).filled().build();

    let wanted: Vec<CellId> = grid
        .cells()
        .filter(|_| rng.below(2) == 0)
        .map(|cell| cell.id)
        .collect();
    let sel = select_connected(&grid, &wanted);

    let before = grid.to_json().unwrap();
    let result = grid.merge(&sel, None);

    if sel.len() <= 1 {
        assert_eq!(result.unwrap(), grid);
        return;
    }

    let bounds = grid.selection_bounds(&sel).unwrap().unwrap();
    let area = (bounds.max_row - bounds.min_row + 1) * (bounds.max_col - bounds.min_col + 1);
    let rectangular = area as usize == sel.len();

    match result {
        Ok(merged) => {
            assert!(rectangular, "merged a non-rectangular selection {:?}", sel.ids());
            assert_eq!(merged.cell_count(), grid.cell_count() - sel.len() + 1);
            let cell = merged.cell(CellId::at(bounds.min_row, bounds.min_col)).unwrap();
            assert_eq!(cell.end_row(), bounds.max_row + 1);
            assert_eq!(cell.end_col(), bounds.max_col + 1);
            assert_grid_invariants(&merged);
        }
        Err(e) => {
            assert!(!rectangular, "rejected rectangular selection {:?}: {e}", sel.ids());
            assert_eq!(grid.to_json().unwrap(), before);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn merge_succeeds_iff_selection_is_rectangular(seed in any::<u64>()) {
        check_rectangle_law(seed);
    }
}

#[test]
fn test_rectangle_law_seed_corpus() {
    for seed in 0..64 {
        check_rectangle_law(seed);
    }
}
