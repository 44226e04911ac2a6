//! Prefix-sum boundary positions for a run of row heights or column widths.

use serde::Serialize;

/// Boundary positions and sizes along one axis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segments {
    /// Cumulative positions (`positions[i]` = start of segment i, last entry = total)
    pub positions: Vec<f64>,
    /// Segment sizes, one per row or column
    pub segments: Vec<f64>,
}

/// Where to draw the dimension label for one row or column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionLabel {
    pub index: u32,
    /// Midpoint of the segment
    pub position: f64,
    pub size: f64,
}

/// Compute boundary positions for `sizes`.
///
/// `n` sizes produce `n + 1` positions starting at 0. An empty input gives
/// `positions = [0]` and no segments.
pub fn compute_segments(sizes: &[f64]) -> Segments {
    let mut positions = Vec::with_capacity(sizes.len() + 1);
    let mut pos = 0.0;
    positions.push(pos);
    for &size in sizes {
        pos += size;
        positions.push(pos);
    }
    Segments {
        positions,
        segments: sizes.to_vec(),
    }
}

impl Segments {
    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total extent (last boundary position)
    pub fn total(&self) -> f64 {
        self.positions.last().copied().unwrap_or(0.0)
    }

    /// Start position of segment `index`
    pub fn start(&self, index: u32) -> Option<f64> {
        if index as usize >= self.segments.len() {
            return None;
        }
        self.positions.get(index as usize).copied()
    }

    /// Midpoint of segment `index`
    pub fn midpoint(&self, index: u32) -> Option<f64> {
        let start = self.start(index)?;
        let size = self.segments.get(index as usize)?;
        Some(start + size / 2.0)
    }

    /// Start and length of `span` segments beginning at `index`.
    pub fn extent(&self, index: u32, span: u32) -> Option<(f64, f64)> {
        let start = self.start(index)?;
        let end_index = index.checked_add(span)? as usize;
        if end_index > self.segments.len() {
            return None;
        }
        let end = self.positions.get(end_index)?;
        Some((start, end - start))
    }

    /// Segment containing `pos` (binary search).
    ///
    /// Positions before 0 or at/after the total are outside every segment.
    pub fn index_at(&self, pos: f64) -> Option<u32> {
        if !(pos >= 0.0 && pos < self.total()) {
            return None;
        }
        let i = match self
            .positions
            .binary_search_by(|p| p.partial_cmp(&pos).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        u32::try_from(i).ok()
    }

    /// Label placement for every segment.
    pub fn labels(&self) -> Vec<DimensionLabel> {
        self.positions
            .iter()
            .zip(&self.segments)
            .enumerate()
            .filter_map(|(i, (&start, &size))| {
                Some(DimensionLabel {
                    index: u32::try_from(i).ok()?,
                    position: start + size / 2.0,
                    size,
                })
            })
            .collect()
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

    #[test]
    fn test_empty_sizes() {
        let segs = compute_segments(&[]);
        assert_eq!(segs.positions, vec![0.0]);
        assert!(segs.segments.is_empty());
        assert_eq!(segs.total(), 0.0);
        assert_eq!(segs.index_at(0.0), None);
        assert!(segs.labels().is_empty());
    }

    #[test]
    fn test_positions_are_prefix_sums() {
        let sizes = [600.0, 250.0, 400.0];
        let segs = compute_segments(&sizes);
        assert_eq!(segs.positions, vec![0.0, 600.0, 850.0, 1250.0]);
        assert_eq!(segs.total(), sizes.iter().sum::<f64>());
        for (i, size) in sizes.iter().enumerate() {
            assert_eq!(segs.positions[i + 1] - segs.positions[i], *size);
        }
    }

    #[test]
    fn test_midpoint_and_labels() {
        let segs = compute_segments(&[100.0, 50.0]);
        assert_eq!(segs.midpoint(0), Some(50.0));
        assert_eq!(segs.midpoint(1), Some(125.0));
        assert_eq!(segs.midpoint(2), None);
        assert_eq!(
            segs.labels(),
            vec![
                DimensionLabel {
                    index: 0,
                    position: 50.0,
                    size: 100.0
                },
                DimensionLabel {
                    index: 1,
                    position: 125.0,
                    size: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_extent_covers_span() {
        let segs = compute_segments(&[10.0, 20.0, 30.0]);
        assert_eq!(segs.extent(0, 1), Some((0.0, 10.0)));
        assert_eq!(segs.extent(1, 2), Some((10.0, 50.0)));
        assert_eq!(segs.extent(2, 2), None);
        assert_eq!(segs.extent(3, 1), None);
    }

    #[test]
    fn test_index_at() {
        let segs = compute_segments(&[10.0, 20.0, 30.0]);
        assert_eq!(segs.index_at(0.0), Some(0));
        assert_eq!(segs.index_at(9.9), Some(0));
        assert_eq!(segs.index_at(10.0), Some(1));
        assert_eq!(segs.index_at(45.0), Some(2));
        assert_eq!(segs.index_at(60.0), None);
        assert_eq!(segs.index_at(-1.0), None);
        assert_eq!(segs.index_at(f64::NAN), None);
    }
}
