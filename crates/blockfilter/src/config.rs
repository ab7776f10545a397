//! # Configuration
//!
//! Field names differ between data sources (a PPTX extractor says `slide_index`, a
//! PDF one may say `page`), so the names the filter bar binds to are configurable.
//! Configuration is managed by [`confique`], which handles layered loading from TOML
//! files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `BLOCKFILTER_TYPE_FIELD`, `BLOCKFILTER_TEXT_FIELDS`, etc.
//! 2. **Project Config**: `<dir>/blockfilter.toml`, when a project dir is given.
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `type_field` | `block_type` | Field matched by the type dropdown |
//! | `index_field` | `slide_index` | Field matched by the slide/page number box |
//! | `text_fields` | `["source_text", "translated_text"]` | Fields free-text search looks in |
//! | `page_size` | `50` | Rows per page |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "blockfilter.toml";

/// Configuration for the block table core, stored in `blockfilter.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Field holding the block type (e.g. "textbox", "table_cell")
    #[config(default = "block_type", env = "BLOCKFILTER_TYPE_FIELD")]
    pub type_field: String,

    /// Field holding the slide or page number
    #[config(default = "slide_index", env = "BLOCKFILTER_INDEX_FIELD")]
    pub index_field: String,

    /// Fields searched by the free-text box. Comma separated in the environment.
    #[config(
        default = ["source_text", "translated_text"],
        env = "BLOCKFILTER_TEXT_FIELDS",
        parse_env = confique::env::parse::list_by_comma
    )]
    pub text_fields: Vec<String>,

    /// Rows per page
    #[config(default = 50, env = "BLOCKFILTER_PAGE_SIZE")]
    pub page_size: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            type_field: "block_type".to_string(),
            index_field: "slide_index".to_string(),
            text_fields: vec!["source_text".to_string(), "translated_text".to_string()],
            page_size: 50,
        }
    }
}

impl FilterConfig {
    /// Load the layered configuration. Missing files are skipped.
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        let mut builder = FilterConfig::builder().env();
        if let Some(dir) = project_dir {
            builder = builder.file(dir.join(CONFIG_FILE));
        }
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        let config = builder.load()?;
        tracing::debug!(
            type_field = %config.type_field,
            index_field = %config.index_field,
            text_fields = ?config.text_fields,
            "Filter config loaded"
        );
        Ok(config)
    }

    /// Search fields with surrounding whitespace trimmed and blank entries dropped.
    ///
    /// The comma-separated env form is split verbatim, so `"a, b"` arrives as
    /// `["a", " b"]` and an empty variable as `[""]`.
    pub fn text_fields(&self) -> Vec<String> {
        self.text_fields
            .iter()
            .map(|field| field.trim())
            .filter(|field| !field.is_empty())
            .map(String::from)
            .collect()
    }

    /// Rows per page, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// Location of the global config file, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "blockfilter")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::searchable_fields;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.type_field, "block_type");
        assert_eq!(config.index_field, "slide_index");
        assert_eq!(config.text_fields, vec!["source_text", "translated_text"]);
        assert_eq!(config.page_size(), 50);
    }

    #[test]
    fn test_default_text_fields_match_schema() {
        let config = FilterConfig::default();
        let searchable: Vec<String> = searchable_fields().map(String::from).collect();
        assert_eq!(config.text_fields, searchable);
    }

    #[test]
    fn test_text_fields_trimmed() {
        let config = FilterConfig {
            text_fields: vec!["source_text".to_string(), " translated_text ".to_string()],
            ..Default::default()
        };
        assert_eq!(config.text_fields(), vec!["source_text", "translated_text"]);
    }

    #[test]
    fn test_text_fields_blank_entries_dropped() {
        let config = FilterConfig {
            text_fields: vec!["".to_string(), "  ".to_string(), "source_text".to_string()],
            ..Default::default()
        };
        assert_eq!(config.text_fields(), vec!["source_text"]);

        let empty = FilterConfig {
            text_fields: vec!["".to_string()],
            ..Default::default()
        };
        assert!(empty.text_fields().is_empty());
    }

    #[test]
    fn test_page_size_never_zero() {
        let config = FilterConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.page_size(), 1);
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let custom = FilterConfig {
            index_field: "page".to_string(),
            text_fields: vec!["source".to_string(), "target".to_string()],
            ..Default::default()
        };
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            toml::to_string(&custom).unwrap(),
        )
        .unwrap();

        let loaded = FilterConfig::load(Some(dir.path())).unwrap();
        assert_eq!(loaded.index_field, "page");
        assert_eq!(loaded.text_fields, vec!["source", "target"]);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "type_field = \"kind\"\n")
            .unwrap();

        let loaded = FilterConfig::load(Some(dir.path())).unwrap();
        assert_eq!(loaded.type_field, "kind");
        assert_eq!(loaded.index_field, "slide_index");
    }

    #[test]
    fn test_missing_project_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FilterConfig::load(Some(dir.path())).is_ok());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "page_size = \"many\"\n")
            .unwrap();
        assert!(FilterConfig::load(Some(dir.path())).is_err());
    }
}
