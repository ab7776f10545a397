//! Row filtering.
//!
//! A [`FilterSpec`] is a snapshot of everything the filter bar currently says: zero
//! or more [`FieldPredicate`]s plus one free-text [`TextQuery`]. [`filter`] keeps the
//! rows that satisfy all of them (AND logic), in their original order.
//!
//! Predicate values are raw user input. Anything that does not express a real
//! constraint (empty box, the [`ALL`] dropdown entry, a slide box holding "abc") is
//! a no-op rather than a filter that matches nothing.

use crate::config::FilterConfig;
use crate::model::{Row, RowId};
use crate::schema;
use serde::{Deserialize, Serialize};

/// Dropdown entry meaning "do not filter on this field".
pub const ALL: &str = "all";

/// Filter operation for comparing an attribute against the predicate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact match against the attribute's string form. [`ALL`] or empty is a no-op.
    Equals,
    /// Case-insensitive substring. Empty is a no-op.
    Contains,
    /// Numeric equality. A value that does not parse as a number is a no-op.
    NumericEquals,
}

/// A filter condition on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPredicate {
    /// The attribute name (e.g., "block_type", "slide_index")
    pub field: String,
    /// The filter operation
    pub op: FilterOp,
    /// The user-supplied value, exactly as typed or picked
    pub value: String,
}

impl FieldPredicate {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Equals, value)
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Contains, value)
    }

    pub fn numeric_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::NumericEquals, value)
    }

    /// Whether this predicate lets every row through.
    pub fn is_noop(&self) -> bool {
        Active::from_predicate(self).is_none()
    }

    /// Check if this predicate accepts the given row.
    pub fn matches(&self, row: &Row) -> bool {
        match Active::from_predicate(self) {
            Some(active) => active.matches(row),
            None => true,
        }
    }
}

/// Free-text search over a set of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextQuery {
    pub query: String,
    /// Fields to look in. A row matches if any of them contains the query.
    pub fields: Vec<String>,
}

impl Default for TextQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            fields: schema::searchable_fields().map(String::from).collect(),
        }
    }
}

impl TextQuery {
    pub fn new(query: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            query: query.into(),
            fields,
        }
    }

    /// Blank queries and queries with nowhere to look filter nothing.
    pub fn is_noop(&self) -> bool {
        self.query.trim().is_empty() || self.fields.is_empty()
    }

    pub fn matches(&self, row: &Row) -> bool {
        match Active::from_text(self) {
            Some(active) => active.matches(row),
            None => true,
        }
    }
}

/// Snapshot of all active predicates for one filter call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub predicates: Vec<FieldPredicate>,
    pub text: TextQuery,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: FieldPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn equals(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(FieldPredicate::equals(field, value))
    }

    pub fn contains(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(FieldPredicate::contains(field, value))
    }

    pub fn numeric_equals(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(FieldPredicate::numeric_equals(field, value))
    }

    /// Set the free-text query.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.text.query = query.into();
        self
    }

    /// Replace the fields searched by the free-text query.
    pub fn search_in<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.text.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Number of predicates that actually constrain rows.
    pub fn active_count(&self) -> usize {
        Compiled::new(self).active.len()
    }

    pub fn is_noop(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches(&self, row: &Row) -> bool {
        Compiled::new(self).matches(row)
    }
}

/// Filter input shaped like the block table's filter bar.
///
/// `block_type` comes from a dropdown whose first entry is [`ALL`], `slide` from a
/// number box that may hold anything while the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockQuery {
    pub block_type: String,
    pub slide: String,
    pub search: String,
}

impl Default for BlockQuery {
    fn default() -> Self {
        Self {
            block_type: ALL.to_string(),
            slide: String::new(),
            search: String::new(),
        }
    }
}

impl BlockQuery {
    /// Build the spec using the configured field names.
    pub fn to_spec(&self, config: &FilterConfig) -> FilterSpec {
        FilterSpec::new()
            .equals(config.type_field.as_str(), self.block_type.as_str())
            .numeric_equals(config.index_field.as_str(), self.slide.as_str())
            .search(self.search.as_str())
            .search_in(config.text_fields())
    }
}

/// A predicate reduced to what it checks, with query strings normalized once.
enum Active<'a> {
    Equals {
        field: &'a str,
        value: &'a str,
    },
    Contains {
        field: &'a str,
        needle: String,
    },
    NumericEquals {
        field: &'a str,
        value: f64,
    },
    Text {
        fields: &'a [String],
        needle: String,
    },
}

impl<'a> Active<'a> {
    fn from_predicate(predicate: &'a FieldPredicate) -> Option<Self> {
        let value = predicate.value.trim();
        let field = predicate.field.as_str();
        match predicate.op {
            FilterOp::Equals => {
                (!value.is_empty() && value != ALL).then_some(Active::Equals { field, value })
            }
            FilterOp::Contains => (!value.is_empty()).then(|| Active::Contains {
                field,
                needle: value.to_lowercase(),
            }),
            FilterOp::NumericEquals => {
                parse_number(value).map(|value| Active::NumericEquals { field, value })
            }
        }
    }

    fn from_text(text: &'a TextQuery) -> Option<Self> {
        if text.is_noop() {
            return None;
        }
        Some(Active::Text {
            fields: &text.fields,
            needle: text.query.trim().to_lowercase(),
        })
    }

    fn matches(&self, row: &Row) -> bool {
        match self {
            Active::Equals { field, value } => row
                .get(field)
                .is_some_and(|attr| attr.to_display_string() == *value),
            Active::Contains { field, needle } => {
                row.text(field).to_lowercase().contains(needle.as_str())
            }
            Active::NumericEquals { field, value } => row.number(field) == Some(*value),
            Active::Text { fields, needle } => fields
                .iter()
                .any(|field| row.text(field).to_lowercase().contains(needle.as_str())),
        }
    }
}

struct Compiled<'a> {
    active: Vec<Active<'a>>,
}

impl<'a> Compiled<'a> {
    fn new(spec: &'a FilterSpec) -> Self {
        let active = spec
            .predicates
            .iter()
            .filter_map(Active::from_predicate)
            .chain(Active::from_text(&spec.text))
            .collect();
        Self { active }
    }

    fn matches(&self, row: &Row) -> bool {
        self.active.iter().all(|active| active.matches(row))
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Keep the rows that satisfy every active predicate, in their original order.
pub fn filter<'a>(rows: &'a [Row], spec: &FilterSpec) -> Vec<&'a Row> {
    let compiled = Compiled::new(spec);
    let kept: Vec<&Row> = rows.iter().filter(|row| compiled.matches(row)).collect();
    tracing::trace!(
        rows = rows.len(),
        kept = kept.len(),
        predicates = compiled.active.len(),
        "Filtered rows"
    );
    kept
}

/// Positions of the matching rows within `rows`.
pub fn filter_indices(rows: &[Row], spec: &FilterSpec) -> Vec<usize> {
    let compiled = Compiled::new(spec);
    rows.iter()
        .enumerate()
        .filter(|(_, row)| compiled.matches(row))
        .map(|(idx, _)| idx)
        .collect()
}

/// Ids of the matching rows, the domain for "select all visible".
pub fn filter_ids(rows: &[Row], spec: &FilterSpec) -> Vec<RowId> {
    filter(rows, spec)
        .into_iter()
        .map(|row| row.id().clone())
        .collect()
}
