//! Segment and geometry tests for row heights / column widths.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;
mod fixtures;

use common::{default_layout, select, GridBuilder};
use proptest::prelude::*;
use sashgrid::{compute_segments, CellId, GridLayout};

proptest! {
    #[test]
    fn positions_are_prefix_sums(sizes in prop::collection::vec(1u32..5000, 0..24)) {
        // Integer-valued sizes keep the sums exact
        let sizes: Vec<f64> = sizes.into_iter().map(f64::from).collect();
        let segs = compute_segments(&sizes);

        prop_assert_eq!(segs.positions.len(), sizes.len() + 1);
        prop_assert_eq!(segs.positions[0], 0.0);
        prop_assert_eq!(segs.total(), sizes.iter().sum::<f64>());
        for (i, size) in sizes.iter().enumerate() {
            prop_assert_eq!(segs.positions[i + 1] - segs.positions[i], *size);
            let i = u32::try_from(i).unwrap();
            prop_assert_eq!(segs.index_at(segs.midpoint(i).unwrap()), Some(i));
        }
    }
}

#[test]
fn test_row_and_column_segments_are_computed_alike() {
    let grid = GridBuilder::new(3, 3)
        .row_heights(&[10.0, 20.0, 30.0])
        .column_widths(&[10.0, 20.0, 30.0])
        .build();
    assert_eq!(grid.row_segments(), grid.column_segments());
}

#[test]
fn test_layout_follows_dimension_edits() {
    let grid = default_layout();
    let before = GridLayout::new(&grid);
    let edited = grid.update_column_width(1, 4.0);
    let after = GridLayout::new(&edited);

    // Old layout belongs to the old snapshot
    assert_eq!(before.total_width(), 3.0);
    assert_eq!(after.total_width(), 6.0);

    let wide = after
        .cell_rect(edited.cell(CellId::at(0, 0)).unwrap())
        .unwrap();
    assert_eq!(wide.width, 5.0);
    let tall = after
        .cell_rect(edited.cell(CellId::at(0, 2)).unwrap())
        .unwrap();
    assert_eq!((tall.x, tall.height), (5.0, 2.0));
}

#[test]
fn test_merged_cell_rect_covers_absorbed_cells() {
    let grid = GridBuilder::new(2, 2)
        .row_heights(&[600.0, 400.0])
        .column_widths(&[450.0, 450.0])
        .filled()
        .build();
    let merged = grid
        .merge(&select(&grid, &[(0, 0), (1, 0)]), None)
        .unwrap();
    let layout = GridLayout::new(&merged);
    let rect = layout
        .cell_rect(merged.cell(CellId::at(0, 0)).unwrap())
        .unwrap();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 450.0, 1000.0));
    assert_eq!(layout.cell_at_point(&merged, 10.0, 900.0), Some(CellId::at(0, 0)));
}

#[test]
fn test_labels_sit_at_midpoints() {
    let grid = GridBuilder::new(2, 1).row_heights(&[600.0, 400.0]).build();
    let labels = GridLayout::new(&grid).row_labels();
    let positions: Vec<f64> = labels.iter().map(|l| l.position).collect();
    assert_eq!(positions, vec![300.0, 800.0]);
}
