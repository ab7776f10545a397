//! Row data types.
//!
//! A [`Row`] is one record of the block table: an extracted text block, a glossary
//! term, anything with a stable id and named attributes. The core never interprets
//! attributes beyond what a predicate asks for, so values stay loosely typed as
//! [`AttrValue`].

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Stable row identifier assigned by the data source.
///
/// Equality is by value: `RowId::from(1)` built twice compares equal, and an integer
/// id never equals a text id even if they print the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowId::Int(i) => write!(f, "{}", i),
            RowId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RowId {
    fn from(value: i64) -> Self {
        RowId::Int(value)
    }
}

impl From<i32> for RowId {
    fn from(value: i32) -> Self {
        RowId::Int(value.into())
    }
}

impl From<u32> for RowId {
    fn from(value: u32) -> Self {
        RowId::Int(value.into())
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        RowId::Text(value.to_string())
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        RowId::Text(value)
    }
}

impl From<&RowId> for RowId {
    fn from(value: &RowId) -> Self {
        value.clone()
    }
}

/// Runtime representation of an attribute value.
///
/// Deserializes from plain JSON scalars, so a REST payload maps onto rows without
/// a schema. Arrays and objects (a bounding box, say) are kept as
/// [`AttrValue::Structured`] and never match a predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(f64),
    /// Free text and enum-like values (e.g. `block_type` = "textbox")
    Text(String),
    Structured(serde_json::Value),
}

impl AttrValue {
    /// Get the string if this is Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Read the value as a number.
    ///
    /// Text holding a number (`"3"`, `" 2.5 "`) counts, since data sources are not
    /// consistent about quoting indexes. Non-finite values never match.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            AttrValue::Number(n) => *n,
            AttrValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    /// String form used for equality and substring predicates.
    ///
    /// Null and structured values render as the empty string. Integral numbers drop
    /// the fraction (`2.0` renders as `2`).
    pub fn to_display_string(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Null => Cow::Borrowed(""),
            AttrValue::Bool(v) => Cow::Borrowed(if *v { "true" } else { "false" }),
            AttrValue::Number(n) => Cow::Owned(n.to_string()),
            AttrValue::Text(s) => Cow::Borrowed(s),
            AttrValue::Structured(_) => Cow::Borrowed(""),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

/// Exact up to 2^53 in magnitude. Larger integers round to the nearest `f64`.
impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// One filterable, selectable record.
///
/// Serialized as a flat object: `id` plus one key per attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    id: RowId,
    #[serde(flatten)]
    attributes: BTreeMap<String, AttrValue>,
}

impl Row {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(field.into(), value.into());
        self
    }

    pub fn id(&self) -> &RowId {
        &self.id
    }

    pub fn get(&self, field: &str) -> Option<&AttrValue> {
        self.attributes.get(field)
    }

    /// Sets an attribute, returning the previous value if there was one.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.attributes.insert(field.into(), value.into())
    }

    /// Text form of an attribute, empty when the attribute is absent.
    pub fn text(&self, field: &str) -> Cow<'_, str> {
        self.get(field)
            .map(AttrValue::to_display_string)
            .unwrap_or(Cow::Borrowed(""))
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(AttrValue::as_number)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Decode a JSON array of flat row objects.
pub fn rows_from_json(json: &str) -> Result<Vec<Row>> {
    let rows: Vec<Row> = serde_json::from_str(json)?;
    tracing::trace!(count = rows.len(), "Decoded rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_equality_is_by_value() {
        assert_eq!(RowId::from(7), RowId::from(7i64));
        assert_eq!(RowId::from("b-1"), RowId::from("b-1".to_string()));
        assert_ne!(RowId::from(1), RowId::from("1"));
    }

    #[test]
    fn row_id_display() {
        assert_eq!(RowId::from(42).to_string(), "42");
        assert_eq!(RowId::from("blk_3").to_string(), "blk_3");
    }

    #[test]
    fn decode_flat_rows() {
        let rows = rows_from_json(
            r#"[
                {"id": 1, "block_type": "textbox", "slide_index": 1, "source_text": "Hi"},
                {"id": "g-7", "source_text": "Bye", "translated_text": null, "locked": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id(), &RowId::Int(1));
        assert_eq!(rows[0].get("block_type"), Some(&AttrValue::from("textbox")));
        assert_eq!(rows[0].number("slide_index"), Some(1.0));
        assert_eq!(rows[1].id(), &RowId::from("g-7"));
        assert_eq!(rows[1].get("translated_text"), Some(&AttrValue::Null));
        assert_eq!(rows[1].get("locked"), Some(&AttrValue::Bool(true)));
        assert!(rows[1].get("id").is_none());
    }

    #[test]
    fn decode_keeps_structured_attributes() {
        let rows = rows_from_json(
            r#"[{"id": 1, "source_text": "Hi", "bbox": [1, 2, 3, 4], "style": {"bold": true}}]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text("source_text"), "Hi");
        assert_eq!(
            rows[0].get("bbox"),
            Some(&AttrValue::Structured(serde_json::json!([1, 2, 3, 4])))
        );
        assert_eq!(rows[0].text("bbox"), "");
        assert_eq!(rows[0].number("bbox"), None);
        assert!(matches!(rows[0].get("style"), Some(AttrValue::Structured(_))));
    }

    #[test]
    fn decode_rejects_missing_id() {
        assert!(rows_from_json(r#"[{"source_text": "Hi"}]"#).is_err());
    }

    #[test]
    fn text_defaults_to_empty() {
        let row = Row::new(1).with("source_text", "Hello");
        assert_eq!(row.text("source_text"), "Hello");
        assert_eq!(row.text("translated_text"), "");
    }

    #[test]
    fn number_reads_numeric_text() {
        let row = Row::new(1)
            .with("slide_index", "3")
            .with("page", " 2.5 ")
            .with("label", "three");
        assert_eq!(row.number("slide_index"), Some(3.0));
        assert_eq!(row.number("page"), Some(2.5));
        assert_eq!(row.number("label"), None);
        assert_eq!(row.number("missing"), None);
    }

    #[test]
    fn non_finite_numbers_are_not_numbers() {
        assert_eq!(AttrValue::Number(f64::NAN).as_number(), None);
        assert_eq!(AttrValue::from("inf").as_number(), None);
    }

    #[test]
    fn display_string_forms() {
        assert_eq!(AttrValue::Number(2.0).to_display_string(), "2");
        assert_eq!(AttrValue::Number(2.5).to_display_string(), "2.5");
        assert_eq!(AttrValue::Bool(false).to_display_string(), "false");
        assert_eq!(AttrValue::Null.to_display_string(), "");
    }

    #[test]
    fn integers_exact_up_to_2_pow_53() {
        let limit = 1i64 << 53;
        assert_eq!(AttrValue::from(limit).as_number(), Some(9_007_199_254_740_992.0));
        assert_eq!(AttrValue::from(limit).to_display_string(), "9007199254740992");
        assert_eq!(AttrValue::from(-limit).to_display_string(), "-9007199254740992");
        // One past the limit rounds back onto it
        assert_eq!(AttrValue::from(limit + 1), AttrValue::from(limit));
    }

    #[test]
    fn set_returns_previous_value() {
        let mut row = Row::new(1).with("category", "brand");
        let prev = row.set("category", "product");
        assert_eq!(prev, Some(AttrValue::from("brand")));
        assert_eq!(row.text("category"), "product");
    }
}
