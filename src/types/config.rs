use serde::{Deserialize, Serialize};

/// Default size of a newly appended row.
pub const DEFAULT_ROW_HEIGHT: f64 = 1.0;

/// Default size of a newly appended column.
pub const DEFAULT_COL_WIDTH: f64 = 1.0;

/// Sizing rules for a grid editing session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Height given to rows created by `add_row`
    pub default_row_height: f64,
    /// Width given to columns created by `add_column`
    pub default_column_width: f64,
    /// Dimension updates must be strictly greater than this
    pub min_dimension: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_column_width: DEFAULT_COL_WIDTH,
            min_dimension: 0.0,
        }
    }
}

impl GridConfig {
    /// True if `size` may be stored as a row height or column width.
    pub fn accepts(&self, size: f64) -> bool {
        size.is_finite() && size > self.min_dimension
    }
}
