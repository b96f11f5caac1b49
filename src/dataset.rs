// src/dataset.rs
//
// The canonical in-memory table. Loaded once per file version (see loader.rs)
// and shared read-only behind an Arc; filtering and display never mutate it.

/// One table cell. `None` is an absent value (an empty field in the CSV).
pub type Cell = Option<String>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build from headers and rows. Every row is padded with `None` or cut so
    /// that it has exactly one cell per header.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, None);
        }
        Self { headers, rows }
    }

    /// Build from plain text rows; empty strings become `None`.
    pub fn from_text_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|r| {
                r.into_iter()
                    .map(|v| if v.is_empty() { None } else { Some(v) })
                    .collect()
            })
            .collect();
        Self::new(headers, rows)
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn rows(&self) -> &[Vec<Cell>] { &self.rows }

    pub fn row(&self, ix: usize) -> Option<&[Cell]> {
        self.rows.get(ix).map(|r| r.as_slice())
    }

    /// Text of a cell, `None` when absent or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn column_count(&self) -> usize { self.headers.len() }

    /// True when there are no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Copy of the rows at `row_ix`, same headers, same relative order.
    pub fn subset(&self, row_ix: &[usize]) -> Dataset {
        let rows = row_ix
            .iter()
            .filter_map(|&ix| self.rows.get(ix).cloned())
            .collect();
        Dataset { headers: self.headers.clone(), rows }
    }
}
