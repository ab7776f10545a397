//! # Blockfilter Architecture
//!
//! Blockfilter is the **framework-free core** behind a translation block table. A UI
//! (web view, TUI, anything) owns rendering and events; this crate owns the rules for
//! which rows are visible and which are selected.
//!
//! ## The Two Components
//!
//! ```text
//! ┌──────────────┐  Vec<Row>   ┌────────────────────┐  visible rows  ┌──────────────────┐
//! │ Data source  │ ──────────▶ │ filter::filter()   │ ─────────────▶ │ Presentation     │
//! │ (REST, etc.) │             │ + FilterSpec       │                │ layer            │
//! └──────────────┘             └────────────────────┘                └──────────────────┘
//!                                                                      │ toggle / select_all
//!                                                                      ▼
//!                              ┌────────────────────┐  selected ids  ┌──────────────────┐
//!                              │ SelectionSet       │ ─────────────▶ │ Batch actions    │
//!                              └────────────────────┘                └──────────────────┘
//! ```
//!
//! The two components only meet through [`RowId`] values. Filtering never touches the
//! selection, and the selection never looks at row attributes.
//!
//! ## Key Principle: Total Over User Input
//!
//! Filter values come from search boxes and dropdowns. An empty box, the `"all"`
//! option, or a half-typed slide number must never hide rows or return an error.
//! Every predicate that cannot be interpreted is a no-op. The only fallible entry
//! points are configuration loading and JSON row decoding.
//!
//! ## Module Overview
//!
//! - [`model`]: `Row`, `RowId` and `AttrValue`
//! - [`schema`]: registry of well-known block fields
//! - [`filter`]: `FilterSpec`, predicates and the filter engine
//! - [`selection`]: `SelectionSet`
//! - [`page`]: pagination over filtered rows
//! - [`memo`]: single-entry cache for callers that re-filter on every frame
//! - [`batch`]: helpers for bulk actions over the selection
//! - [`config`]: field names and defaults, layered from TOML and env
//! - [`error`]: Error types

pub mod batch;
pub mod config;
pub mod error;
pub mod filter;
pub mod memo;
pub mod model;
pub mod page;
pub mod schema;
pub mod selection;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

pub use error::{BlockError, Result};
pub use filter::{filter, BlockQuery, FieldPredicate, FilterOp, FilterSpec, TextQuery};
pub use model::{AttrValue, Row, RowId};
pub use selection::{SelectionSet, VisibleSelection};
