// --- Test Fixtures ---

use crate::model::{AttrValue, Row};

/// A translation block row with the default field names.
pub fn block(id: i64, block_type: &str, slide: i64, source: &str) -> Row {
    Row::new(id)
        .with("block_type", block_type)
        .with("slide_index", slide)
        .with("source_text", source)
}

/// Six blocks over three slides, mixing types and translation states.
pub fn sample_blocks() -> Vec<Row> {
    vec![
        block(1, "textbox", 1, "Quarterly revenue").with("translated_text", "Quartalsumsatz"),
        block(2, "table_cell", 1, "Revenue 2023").with("translated_text", "Umsatz 2023"),
        block(3, "textbox", 2, "Agenda").with("translated_text", ""),
        block(4, "notes", 2, "Speaker notes about revenue")
            .with("translated_text", AttrValue::Null),
        block(5, "table_cell", 3, "Costs").with("translated_text", "Kosten"),
        // Some extractors emit the index as text
        Row::new(6)
            .with("block_type", "textbox")
            .with("slide_index", "3")
            .with("source_text", "Thank you"),
    ]
}
