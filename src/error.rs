// src/error.rs
//
// Error taxonomy. Nothing here is fatal to the process: every failure is
// turned into a `Diagnostic` at the edge of the render pass and shown to the
// user, and that run stops.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::schema::Field;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Could not read CSV: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Required columns missing from a loaded table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Missing expected column(s): {}", join_fields(.missing))]
pub struct SchemaError {
    /// Absent fields, in required-column order.
    pub missing: Vec<Field>,
    /// The first few column names that *are* present.
    pub available: Vec<String>,
}

impl SchemaError {
    pub fn hint(&self) -> String {
        format!("Available columns include: {}...", self.available.join(", "))
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields.iter().map(|f| f.column()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("No rows to search in {}", path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0} (expected Proposal, Lay_Summary or Supervisors)")]
pub struct ParseFieldError(pub String);

/// What the user gets to see when a run halts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// Secondary line, e.g. the sample of available columns.
    pub hint: Option<String>,
}

impl From<&SearchError> for Diagnostic {
    fn from(err: &SearchError) -> Self {
        let hint = match err {
            SearchError::Schema(e) => Some(e.hint()),
            _ => None,
        };
        Diagnostic { message: err.to_string(), hint }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n{hint}")?;
        }
        Ok(())
    }
}
