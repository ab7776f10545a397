//! Bulk actions over the selection.
//!
//! These helpers apply one change to every selected row (category reassignment,
//! deletion). They report what they touched in a [`BatchOutcome`] and leave the
//! selection alone: whether to `clear()` it afterwards is the caller's call, usually
//! only once the server confirmed the change.

use crate::model::{AttrValue, Row, RowId};
use crate::selection::SelectionSet;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Rows changed or removed, in row order
    pub affected: Vec<RowId>,
    /// Selected ids with no matching row, in selection order
    pub missing: Vec<RowId>,
}

impl BatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.affected.is_empty()
    }
}

/// Selected rows in row order, whether or not they are currently visible.
pub fn selected_rows<'a>(rows: &'a [Row], selection: &SelectionSet) -> Vec<&'a Row> {
    rows.iter()
        .filter(|row| selection.is_selected(row.id()))
        .collect()
}

/// Set `field` to `value` on every selected row.
pub fn assign(
    rows: &mut [Row],
    selection: &SelectionSet,
    field: &str,
    value: impl Into<AttrValue>,
) -> BatchOutcome {
    let value = value.into();
    let mut affected = Vec::new();
    for row in rows.iter_mut() {
        if selection.is_selected(row.id()) {
            row.set(field, value.clone());
            affected.push(row.id().clone());
        }
    }
    let outcome = BatchOutcome {
        missing: missing_ids(&affected, selection),
        affected,
    };
    tracing::debug!(
        field,
        affected = outcome.affected.len(),
        missing = outcome.missing.len(),
        "Batch assign"
    );
    outcome
}

/// Drop every selected row, keeping the order of the rest.
pub fn remove(rows: &mut Vec<Row>, selection: &SelectionSet) -> BatchOutcome {
    let mut affected = Vec::new();
    rows.retain(|row| {
        if selection.is_selected(row.id()) {
            affected.push(row.id().clone());
            false
        } else {
            true
        }
    });
    let outcome = BatchOutcome {
        missing: missing_ids(&affected, selection),
        affected,
    };
    tracing::debug!(
        affected = outcome.affected.len(),
        missing = outcome.missing.len(),
        "Batch remove"
    );
    outcome
}

fn missing_ids(affected: &[RowId], selection: &SelectionSet) -> Vec<RowId> {
    let found: HashSet<&RowId> = affected.iter().collect();
    selection
        .ids()
        .filter(|id| !found.contains(id))
        .cloned()
        .collect()
}
