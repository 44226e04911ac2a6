//! Integration tests for sashgrid.
//!
//! This module provides the shared test infrastructure:
//!
//! - `fixtures`: Builders for grids with known spanning layouts
//! - `common`: Invariant checks and a seeded generator for operation streams
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crate::common::{assert_grid_invariants, select, GridBuilder};
//!
//! fn test_merge_pair() {
//!     let grid = GridBuilder::new(1, 2).filled().build();
//!     let merged = grid.merge(&select(&grid, &[(0, 0), (0, 1)]), None).unwrap();
//!     assert_grid_invariants(&merged);
//! }
//! ```
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

pub mod common;
pub mod fixtures;

// Re-export commonly used items at the top level
pub use common::{assert_grid_invariants, assert_occupancy_consistent, Lcg};
pub use fixtures::{default_layout, select, GridBuilder, Tag};
