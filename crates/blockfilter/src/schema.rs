//! Field specifications and registry.
//!
//! Rows are loosely typed, but the block table works with a known set of fields.
//! This registry records what each one holds and how the filter bar may use it.

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Closed set of values (e.g., `block_type` = "textbox" | "table_cell" | ...)
    Enum,

    /// Whole number (e.g., `slide_index`)
    Integer,

    /// Free text (e.g., `source_text`)
    Text,
}

/// Specification for a single field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// The attribute name as it appears on rows (e.g., "block_type")
    pub name: &'static str,

    /// The kind of value this field holds
    pub kind: FieldKind,

    /// Whether the filter bar offers a dedicated predicate for this field
    pub filterable: bool,

    /// Whether free-text search looks inside this field
    pub searchable: bool,
}

impl FieldSpec {
    /// Create a new field spec with default flags (all false).
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            filterable: false,
            searchable: false,
        }
    }

    const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

/// Registry of well-known block fields.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("block_type", FieldKind::Enum).filterable(),
    FieldSpec::new("slide_index", FieldKind::Integer).filterable(),
    FieldSpec::new("shape_id", FieldKind::Text),
    FieldSpec::new("source_text", FieldKind::Text).searchable(),
    FieldSpec::new("translated_text", FieldKind::Text).searchable(),
    // Glossary rows carry a category instead of a block type
    FieldSpec::new("category", FieldKind::Enum).filterable(),
];

/// Look up a field spec by name.
pub fn get_field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Names of fields free-text search covers by default.
pub fn searchable_fields() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(|spec| spec.searchable)
        .map(|spec| spec.name)
}

/// Names of fields with a dedicated filter predicate.
pub fn filterable_fields() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(|spec| spec.filterable)
        .map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_expected_entries() {
        for name in [
            "block_type",
            "slide_index",
            "shape_id",
            "source_text",
            "translated_text",
            "category",
        ] {
            assert!(get_field(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn unknown_field_returns_none() {
        assert!(get_field("nonexistent").is_none());
    }

    #[test]
    fn slide_index_is_integer_and_filterable() {
        let spec = get_field("slide_index").unwrap();
        assert_eq!(spec.kind, FieldKind::Integer);
        assert!(spec.filterable);
        assert!(!spec.searchable);
    }

    #[test]
    fn searchable_fields_are_the_text_columns() {
        let searchable: Vec<_> = searchable_fields().collect();
        assert_eq!(searchable, vec!["source_text", "translated_text"]);
    }

    #[test]
    fn filterable_fields_returns_expected() {
        let filterable: Vec<_> = filterable_fields().collect();
        assert!(filterable.contains(&"block_type"));
        assert!(filterable.contains(&"slide_index"));
        assert!(filterable.contains(&"category"));
        assert!(!filterable.contains(&"shape_id"));
        assert!(!filterable.contains(&"source_text"));
    }
}
