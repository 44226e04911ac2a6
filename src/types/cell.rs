use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable cell identifier, derived from the anchor the cell was created at.
///
/// Serialized as `cell-{row}-{col}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellId {
    row: u32,
    col: u32,
}

impl CellId {
    /// Id for a cell created with its anchor at `(row, col)`.
    pub fn at(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse the `cell-{row}-{col}` form.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.trim().strip_prefix("cell-")?;
        let (row, col) = rest.split_once('-')?;
        Some(Self {
            row: row.parse().ok()?,
            col: col.parse().ok()?,
        })
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}-{}", self.row, self.col)
    }
}

impl From<CellId> for String {
    fn from(id: CellId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for CellId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid cell id: {s}"))
    }
}

/// A cell anchored at `(row, col)` covering `row_span` rows and `col_span` columns.
///
/// `payload` is the caller's sash descriptor; the grid only carries it around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell<P> {
    pub id: CellId,
    pub row: u32,
    pub col: u32,
    pub row_span: u32,
    pub col_span: u32,
    pub payload: P,
}

impl<P> Cell<P> {
    /// A 1x1 cell at `(row, col)`.
    pub fn new(row: u32, col: u32, payload: P) -> Self {
        Self::spanning(row, col, 1, 1, payload)
    }

    /// A cell covering `row_span` x `col_span` from `(row, col)`. Spans below 1 are clamped to 1.
    pub fn spanning(row: u32, col: u32, row_span: u32, col_span: u32, payload: P) -> Self {
        Self {
            id: CellId::at(row, col),
            row,
            col,
            row_span: row_span.max(1),
            col_span: col_span.max(1),
            payload,
        }
    }

    /// One past the last covered row.
    pub fn end_row(&self) -> u32 {
        self.row.saturating_add(self.row_span)
    }

    /// One past the last covered column.
    pub fn end_col(&self) -> u32 {
        self.col.saturating_add(self.col_span)
    }

    /// Last covered row (inclusive).
    pub fn last_row(&self) -> u32 {
        self.end_row().saturating_sub(1)
    }

    /// Last covered column (inclusive).
    pub fn last_col(&self) -> u32 {
        self.end_col().saturating_sub(1)
    }

    /// True if this cell's span covers `(row, col)`.
    pub fn covers(&self, row: u32, col: u32) -> bool {
        row >= self.row && row < self.end_row() && col >= self.col && col < self.end_col()
    }

    /// True if the two spans share at least one position.
    pub fn overlaps<Q>(&self, other: &Cell<Q>) -> bool {
        self.rows_overlap(other) && self.cols_overlap(other)
    }

    /// True if the two cells share an edge.
    ///
    /// Either the row ranges overlap and the column spans meet end to end,
    /// or the column ranges overlap and the row spans meet end to end.
    pub fn is_adjacent_to<Q>(&self, other: &Cell<Q>) -> bool {
        let side_by_side = self.rows_overlap(other)
            && (self.end_col() == other.col || other.end_col() == self.col);
        let stacked = self.cols_overlap(other)
            && (self.end_row() == other.row || other.end_row() == self.row);
        side_by_side || stacked
    }

    fn rows_overlap<Q>(&self, other: &Cell<Q>) -> bool {
        self.row < other.end_row() && other.row < self.end_row()
    }

    fn cols_overlap<Q>(&self, other: &Cell<Q>) -> bool {
        self.col < other.end_col() && other.col < self.end_col()
    }
}
