use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::CellId;
use crate::grid::Grid;

/// Ordered multi-cell selection.
///
/// Every id after the first was edge-adjacent to an already selected cell
/// when it was added. Adjacency is not re-checked afterwards. Ids are
/// distinct; deserializing a list with repeats fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CellId>", into = "Vec<CellId>")]
pub struct Selection {
    ids: Vec<CellId>,
}

impl Selection {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids in the order they were picked
    pub fn ids(&self) -> &[CellId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.ids.contains(&id)
    }

    /// Toggle `id` against the current grid and return the resulting selection.
    ///
    /// - a selected id is removed, the rest keep their order
    /// - the first pick is unconstrained
    /// - later picks must share an edge with some selected cell
    ///
    /// Ids the grid does not know and non-adjacent picks leave the selection unchanged.
    #[must_use]
    pub fn toggle<P>(&self, grid: &Grid<P>, id: CellId) -> Self {
        if self.contains(id) {
            return Self {
                ids: self.ids.iter().copied().filter(|&s| s != id).collect(),
            };
        }

        let Some(cell) = grid.cell(id) else {
            tracing::debug!(%id, "ignoring toggle of unknown cell");
            return self.clone();
        };

        let adjacent = self.ids.is_empty()
            || self
                .ids
                .iter()
                .filter_map(|&s| grid.cell(s))
                .any(|selected| selected.is_adjacent_to(cell));

        if !adjacent {
            tracing::debug!(%id, "ignoring toggle of non-adjacent cell");
            return self.clone();
        }

        let mut ids = self.ids.clone();
        ids.push(id);
        Self { ids }
    }

    /// Empty selection, regardless of what was selected.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::default()
    }
}

impl TryFrom<Vec<CellId>> for Selection {
    type Error = String;

    fn try_from(ids: Vec<CellId>) -> Result<Self, Self::Error> {
        let mut seen = BTreeSet::new();
        if let Some(dup) = ids.iter().find(|&&id| !seen.insert(id)) {
            return Err(format!("{dup} is selected more than once"));
        }
        Ok(Self { ids })
    }
}

impl From<Selection> for Vec<CellId> {
    fn from(selection: Selection) -> Self {
        selection.ids
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a CellId;
    type IntoIter = std::slice::Iter<'a, CellId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
