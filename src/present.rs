// src/present.rs
//! Presenter: what the results section shows.
//!
//! A `ResultsView` pairs the shared dataset with the filtered row positions
//! and the display column order (the four required columns first, then every
//! other column in file order). It is a zero-copy view: cells are borrowed
//! from the dataset on demand, by the table widget and by the exporter alike.

use std::sync::Arc;

use crate::dataset::Dataset;
use crate::filter::FilteredView;
use crate::schema::Schema;

/// Row counts for the metrics line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
}

impl Summary {
    pub fn total_label(&self) -> String { format_count(self.total) }
    pub fn matched_label(&self) -> String { format_count(self.matched) }
}

/// `1234567` → `"1,234,567"`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Source column positions in display order. Never drops a column.
pub fn display_order(ds: &Dataset, schema: &Schema) -> Vec<usize> {
    let front = schema.required_columns();
    front
        .iter()
        .copied()
        .chain((0..ds.column_count()).filter(|c| !front.contains(c)))
        .collect()
}

#[derive(Clone, Debug)]
pub struct ResultsView {
    dataset: Arc<Dataset>,
    column_order: Vec<usize>,
    view: FilteredView,
}

impl ResultsView {
    pub fn new(dataset: Arc<Dataset>, schema: &Schema, view: FilteredView) -> Self {
        let column_order = display_order(&dataset, schema);
        Self { dataset, column_order, view }
    }

    pub fn summary(&self) -> Summary {
        Summary { total: self.dataset.row_count(), matched: self.view.len() }
    }

    pub fn row_count(&self) -> usize { self.view.len() }
    pub fn column_count(&self) -> usize { self.column_order.len() }
    pub fn is_empty(&self) -> bool { self.view.is_empty() }

    /// Header names in display order.
    pub fn headers(&self) -> impl Iterator<Item = &str> + '_ {
        let headers = self.dataset.headers();
        self.column_order.iter().map(move |&c| headers[c].as_str())
    }

    /// Cell at display coordinates. `None` for absent values.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        let src_row = *self.view.row_ix.get(row)?;
        let src_col = *self.column_order.get(col)?;
        self.dataset.cell(src_row, src_col)
    }

    /// One display row, cells in display order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.column_count()).map(move |col| self.cell(row, col))
    }
}
