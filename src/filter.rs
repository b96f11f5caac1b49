// src/filter.rs
//
// The filter engine. Two independent predicates over a `Dataset`:
//
// - recipient: trimmed query, case-insensitive substring of Recipients
// - keyword:   query as typed, case-insensitive substring of ANY selected field
//
// A blank query disables its predicate, and the keyword predicate is also
// off when no field is selected. Active predicates are ANDed. Absent cells
// never match.
//
// The result is a list of row positions into the dataset, so nothing is copied
// until something (export, tests) asks for owned rows.

use crate::config::options::SearchOptions;
use crate::dataset::{Cell, Dataset};
use crate::schema::{Field, Schema};

/// Rows of a dataset that passed the active filters, in original order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    /// Positions of kept rows in the dataset
    pub row_ix: Vec<usize>,
}

impl FilteredView {
    /// Every row of `ds`.
    pub fn all(ds: &Dataset) -> Self {
        Self { row_ix: (0..ds.row_count()).collect() }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Materialize the kept rows as a standalone dataset.
    pub fn to_dataset(&self, ds: &Dataset) -> Dataset {
        ds.subset(&self.row_ix)
    }
}

/// Apply the search options to `ds`.
pub fn filter_rows(ds: &Dataset, schema: &Schema, opts: &SearchOptions) -> FilteredView {
    let recipient = recipient_needle(&opts.recipient_query);
    let keyword = keyword_needle(&opts.content_query, !opts.fields.is_empty());

    if recipient.is_none() && keyword.is_none() {
        return FilteredView::all(ds);
    }

    let recipient_col = schema.column(Field::Recipients);
    let mut keyword_cols: Vec<usize> = opts
        .fields
        .iter()
        .map(|f| schema.column(f.field()))
        .collect();
    keyword_cols.sort_unstable();
    keyword_cols.dedup();

    let row_ix = ds
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let recipient_ok = recipient
                .as_deref()
                .is_none_or(|n| cell_contains(row.get(recipient_col), n));
            recipient_ok
                && keyword.as_deref().is_none_or(|n| {
                    keyword_cols.iter().any(|&c| cell_contains(row.get(c), n))
                })
        })
        .map(|(ix, _)| ix)
        .collect();

    FilteredView { row_ix }
}

/// Lowercased, trimmed recipient query; `None` when blank.
fn recipient_needle(query: &str) -> Option<String> {
    let q = query.trim();
    (!q.is_empty()).then(|| fold_case(q))
}

/// Lowercased keyword query, NOT trimmed; `None` when blank or when no
/// field is selected.
fn keyword_needle(query: &str, any_field: bool) -> Option<String> {
    (any_field && !query.trim().is_empty()).then(|| fold_case(query))
}

/// Per-char lowercase. Unlike `str::to_lowercase` this has no final-sigma
/// rule, so a char folds the same wherever it sits in a word.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive containment. `needle` is already folded.
fn cell_contains(cell: Option<&Cell>, needle: &str) -> bool {
    cell.and_then(|c| c.as_deref())
        .is_some_and(|v| fold_case(v).contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_needle_trims() {
        assert_eq!(recipient_needle("  Wintink "), Some("wintink".into()));
        assert_eq!(recipient_needle("   "), None);
    }

    #[test]
    fn keyword_needle_keeps_inner_and_outer_spaces() {
        assert_eq!(keyword_needle(" Neuro ", true), Some(" neuro ".into()));
        assert_eq!(keyword_needle("neuro", false), None);
        assert_eq!(keyword_needle("\t", true), None);
    }

    #[test]
    fn absent_cells_never_match() {
        assert!(!cell_contains(Some(&None), "a"));
        assert!(!cell_contains(None, "a"));
        assert!(cell_contains(Some(&Some("ABC".into())), "b"));
    }

    #[test]
    fn final_sigma_folds_like_any_other_sigma() {
        let needle = recipient_needle("Σ").unwrap();
        assert!(cell_contains(Some(&Some("ΟΔΟΣ".into())), &needle));
        let needle = recipient_needle("οσ").unwrap();
        assert!(cell_contains(Some(&Some("ΟΔΟΣ".into())), &needle));
    }
}
