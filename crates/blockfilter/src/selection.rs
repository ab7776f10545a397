//! # Row Selection
//!
//! A [`SelectionSet`] holds the ids of checked rows. It knows nothing about filters:
//! an id stays selected while its row is filtered out, paged away, or even gone from
//! the data source, until the caller explicitly deselects it.
//!
//! ## Visible vs Total
//!
//! The table header checkbox works on the *visible* rows only:
//! - [`SelectionSet::select_all`] adds the visible ids (union, never replace)
//! - [`SelectionSet::deselect_all`] removes the visible ids and nothing else
//! - [`SelectionSet::visible_state`] tells the header whether to render checked,
//!   unchecked or indeterminate
//!
//! [`SelectionSet::count`] is always the total, regardless of what is visible. That
//! is the number a batch action will touch.
//!
//! Ids iterate in the order they were first selected.
//!
//! All operations are idempotent: toggling twice restores the set, and repeating
//! `select_all` with the same ids changes nothing.

use crate::model::RowId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Selection state of the visible rows, for a header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibleSelection {
    None,
    Partial,
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: IndexSet<RowId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: impl Into<RowId>) -> bool {
        let id = id.into();
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select(&mut self, id: impl Into<RowId>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn deselect(&mut self, id: &RowId) -> bool {
        self.ids.shift_remove(id)
    }

    /// Add every given id. Returns how many were newly selected.
    pub fn select_all<I>(&mut self, visible: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<RowId>,
    {
        let before = self.ids.len();
        self.ids.extend(visible.into_iter().map(Into::into));
        self.ids.len() - before
    }

    /// Remove only the given ids. Returns how many were removed.
    pub fn deselect_all<I>(&mut self, visible: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<RowId>,
    {
        let mut removed = 0;
        for id in visible {
            if self.ids.shift_remove(&id.into()) {
                removed += 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Total selected, visible or not.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    /// How many of the given ids are selected. Duplicates count once.
    pub fn count_visible<'a, I>(&self, visible: I) -> usize
    where
        I: IntoIterator<Item = &'a RowId>,
    {
        let visible: IndexSet<&RowId> = visible.into_iter().collect();
        visible.iter().filter(|id| self.ids.contains(**id)).count()
    }

    /// Header checkbox state over the given visible ids.
    ///
    /// An empty visible set is `None`, so an empty page never shows as checked.
    pub fn visible_state<'a, I>(&self, visible: I) -> VisibleSelection
    where
        I: IntoIterator<Item = &'a RowId>,
    {
        let visible: IndexSet<&RowId> = visible.into_iter().collect();
        let selected = visible.iter().filter(|id| self.ids.contains(**id)).count();
        match selected {
            0 => VisibleSelection::None,
            n if n == visible.len() => VisibleSelection::All,
            _ => VisibleSelection::Partial,
        }
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &RowId> {
        self.ids.iter()
    }

    pub fn to_vec(&self) -> Vec<RowId> {
        self.ids.iter().cloned().collect()
    }

    /// Explicit pruning, e.g. after rows were deleted upstream. Never called by
    /// filtering or paging.
    pub fn retain(&mut self, mut keep: impl FnMut(&RowId) -> bool) {
        self.ids.retain(|id| keep(id));
    }
}

impl<T: Into<RowId>> FromIterator<T> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
