//! Layout engine for segment positions and cell geometry.
//!
//! This module handles:
//! - Prefix-sum boundary positions from row heights and column widths
//! - Dimension label placement (segment midpoints)
//! - Cell rectangles for spanning cells
//! - Binary search for hit testing at a point

mod grid_layout;
mod segments;

pub use grid_layout::{CellRect, GridLayout, LayoutReport};
pub use segments::{compute_segments, DimensionLabel, Segments};
