// src/schema.rs
//
// Fixed logical fields and their resolution against a loaded table's headers.
// Column lookup by name happens once here; everything downstream works with
// the resolved indices in `Schema`.

use std::fmt;
use std::str::FromStr;

use crate::config::consts::*;
use crate::dataset::Dataset;
use crate::error::{ParseFieldError, SchemaError};

/// The four columns every valid table must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Recipients,
    Supervisors,
    Proposal,
    LaySummary,
}

impl Field {
    /// Required columns, in display order.
    pub const REQUIRED: [Field; 4] = [
        Field::Recipients,
        Field::Supervisors,
        Field::Proposal,
        Field::LaySummary,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Field::Recipients => COL_RECIPIENTS,
            Field::Supervisors => COL_SUPERVISORS,
            Field::Proposal => COL_PROPOSAL,
            Field::LaySummary => COL_LAY_SUMMARY,
        }
    }

    fn slot(self) -> usize {
        match self {
            Field::Recipients => 0,
            Field::Supervisors => 1,
            Field::Proposal => 2,
            Field::LaySummary => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Fields the content keyword can be searched in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordField {
    Proposal,
    LaySummary,
    Supervisors,
}

impl KeywordField {
    pub const ALL: [KeywordField; 3] = [
        KeywordField::Proposal,
        KeywordField::LaySummary,
        KeywordField::Supervisors,
    ];

    /// The text-heavy fields.
    pub const DEFAULT: [KeywordField; 2] = [KeywordField::Proposal, KeywordField::LaySummary];

    pub fn field(self) -> Field {
        match self {
            KeywordField::Proposal => Field::Proposal,
            KeywordField::LaySummary => Field::LaySummary,
            KeywordField::Supervisors => Field::Supervisors,
        }
    }

    pub fn label(self) -> &'static str {
        self.field().column()
    }
}

impl fmt::Display for KeywordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KeywordField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "proposal" => Ok(KeywordField::Proposal),
            "laysummary" => Ok(KeywordField::LaySummary),
            "supervisors" => Ok(KeywordField::Supervisors),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}

/// Resolved column positions of the required fields in one dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    columns: [usize; 4],
}

impl Schema {
    /// Check that all required columns exist and remember where they are.
    pub fn resolve(ds: &Dataset) -> Result<Schema, SchemaError> {
        let mut columns = [0usize; 4];
        let mut missing = Vec::new();

        for field in Field::REQUIRED {
            match ds.column_index(field.column()) {
                Some(ix) => columns[field.slot()] = ix,
                None => missing.push(field),
            }
        }

        if missing.is_empty() {
            return Ok(Schema { columns });
        }

        let available = ds
            .headers()
            .iter()
            .take(COLUMN_HINT_LIMIT)
            .cloned()
            .collect();
        Err(SchemaError { missing, available })
    }

    pub fn column(&self, field: Field) -> usize {
        self.columns[field.slot()]
    }

    /// Column indices of the required fields, in `Field::REQUIRED` order.
    pub fn required_columns(&self) -> [usize; 4] {
        Field::REQUIRED.map(|f| self.column(f))
    }
}
