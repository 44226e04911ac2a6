//! Common test utilities and assertion helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use sashgrid::Grid;

// Re-export fixtures for convenience
pub use super::fixtures::*;

/// Deterministic generator for operation streams.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        self.state
    }

    /// Value in `0..bound` (`bound` > 0).
    pub fn below(&mut self, bound: u32) -> u32 {
        ((self.next_u64() >> 33) % u64::from(bound)) as u32
    }
}

/// Assert that no two cells share a position and every span lies inside the grid.
pub fn assert_grid_invariants<P>(grid: &Grid<P>) {
    let cells: Vec<_> = grid.cells().collect();
    for (i, a) in cells.iter().enumerate() {
        assert!(a.row_span >= 1 && a.col_span >= 1, "{} has an empty span", a.id);
        assert!(
            a.end_row() <= grid.row_count() && a.end_col() <= grid.column_count(),
            "{} leaves the grid",
            a.id
        );
        for b in &cells[i + 1..] {
            assert!(!a.overlaps(*b), "{} overlaps {}", a.id, b.id);
        }
    }
    grid.validate().expect("grid should validate");
}

/// Assert that each position is owned by exactly the cell `cell_at` reports.
pub fn assert_occupancy_consistent<P>(grid: &Grid<P>) {
    for r in 0..grid.row_count() {
        for c in 0..grid.column_count() {
            let owners = grid.cells().filter(|cell| cell.covers(r, c)).count();
            assert!(owners <= 1, "({r}, {c}) has {owners} owners");
            assert_eq!(grid.is_occupied(r, c), owners == 1);
        }
    }
}
