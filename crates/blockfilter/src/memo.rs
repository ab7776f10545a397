//! Single-entry filter cache.
//!
//! [`crate::filter::filter`] holds no state and is cheap enough to run on every
//! keystroke. Callers that re-render far more often than inputs change (immediate
//! mode UIs, for instance) can put a [`FilterMemo`] in front of it.
//!
//! The cache key is:
//! - a **generation** the caller bumps whenever the row list changes,
//! - the row count, as a guard against a forgotten bump,
//! - the [`FilterSpec`] value.
//!
//! Row identity is not tracked any other way. Mutating rows in place without bumping
//! the generation serves stale results.

use crate::filter::{filter_indices, FilterSpec};
use crate::model::Row;

#[derive(Debug, Clone, PartialEq)]
struct MemoKey {
    generation: u64,
    row_count: usize,
    spec: FilterSpec,
}

#[derive(Debug, Default)]
pub struct FilterMemo {
    cached: Option<(MemoKey, Vec<usize>)>,
    hits: u64,
    misses: u64,
}

impl FilterMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter `rows`, reusing the previous result when the key matches.
    pub fn filter<'a>(
        &mut self,
        generation: u64,
        rows: &'a [Row],
        spec: &FilterSpec,
    ) -> Vec<&'a Row> {
        let fresh = match &self.cached {
            Some((key, _)) => {
                key.generation != generation || key.row_count != rows.len() || key.spec != *spec
            }
            None => true,
        };

        if fresh {
            self.misses += 1;
            tracing::trace!(generation, rows = rows.len(), "Filter memo miss");
            let key = MemoKey {
                generation,
                row_count: rows.len(),
                spec: spec.clone(),
            };
            self.cached = Some((key, filter_indices(rows, spec)));
        } else {
            self.hits += 1;
        }

        match &self.cached {
            Some((_, indices)) => indices.iter().filter_map(|&i| rows.get(i)).collect(),
            None => Vec::new(),
        }
    }

    /// Drop the cached result; the next call recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
