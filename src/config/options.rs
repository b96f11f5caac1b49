// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::schema::KeywordField;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
}

/// The user's filter inputs for one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Substring looked for in Recipients (trimmed before matching).
    pub recipient_query: String,
    /// Substring looked for in the selected fields (matched as typed).
    pub content_query: String,
    /// Where the content query is searched.
    pub fields: Vec<KeywordField>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            recipient_query: String::new(),
            content_query: String::new(),
            fields: KeywordField::DEFAULT.to_vec(),
        }
    }
}

impl SearchOptions {
    pub fn new(
        recipient_query: impl Into<String>,
        content_query: impl Into<String>,
        fields: impl IntoIterator<Item = KeywordField>,
    ) -> Self {
        let mut opts = Self {
            recipient_query: recipient_query.into(),
            content_query: content_query.into(),
            fields: Vec::new(),
        };
        for f in fields {
            opts.set_field(f, true);
        }
        opts
    }

    pub fn has_field(&self, field: KeywordField) -> bool {
        self.fields.contains(&field)
    }

    /// Select or deselect a field. Selection is kept in `KeywordField::ALL`
    /// order without duplicates.
    pub fn set_field(&mut self, field: KeywordField, on: bool) {
        if on == self.has_field(field) {
            return;
        }
        if on {
            self.fields.push(field);
            self.fields
                .sort_by_key(|f| KeywordField::ALL.iter().position(|a| a == f));
        } else {
            self.fields.retain(|f| *f != field);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path { &self.out_dir }

    /// Parse GUI/CLI text into the output directory. Blank text means the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(normalize_separators(s))
        };
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}
