// tests/render_pass.rs
mod common;

use bonf_search::config::options::SearchOptions;
use bonf_search::error::SearchError;
use bonf_search::loader::DatasetCache;
use bonf_search::render::{render, search, Render};
use bonf_search::schema::KeywordField;
use tempfile::tempdir;

use common::{write_file, HEADER};

const ROWS: &str = "\
2021,Alice Wintink,Queen's,Dr. Stone,Neurofeedback study,Training the brain
2021,Bob Lee,UBC,Dr. Neumann,Robotics,Walking machines
2022,,McGill,Dr. Park,Sleep,
";

#[test]
fn missing_file_halts_with_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.csv");

    let out = render(&mut DatasetCache::new(), &path, &SearchOptions::default());
    let diag = out.diagnostic().unwrap();
    assert!(diag.message.starts_with("File not found: "));
    assert!(diag.hint.is_none());
    assert!(out.results().is_none());
}

#[test]
fn missing_column_halts_with_hint() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", "Recipients,Supervisors,Proposal\nA,B,C\n");

    match render(&mut DatasetCache::new(), &path, &SearchOptions::default()) {
        Render::Halted(d) => {
            assert_eq!(d.message, "Missing expected column(s): Lay_Summary");
            assert!(d.hint.is_some());
        }
        Render::Ready(_) => panic!("expected halt"),
    }
}

#[test]
fn header_only_file_halts_as_empty() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n"));

    let err = search(&mut DatasetCache::new(), &path, &SearchOptions::default()).unwrap_err();
    assert!(matches!(err, SearchError::Empty { .. }));
}

#[test]
fn ready_pass_reports_counts_and_order() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n{ROWS}"));
    let mut cache = DatasetCache::new();

    let out = render(&mut cache, &path, &SearchOptions::new("  lee ", "", KeywordField::DEFAULT));
    let v = out.results().unwrap();

    let s = v.summary();
    assert_eq!((s.total, s.matched), (3, 1));
    assert_eq!(
        v.headers().collect::<Vec<_>>(),
        ["Recipients", "Supervisors", "Proposal", "Lay_Summary", "Year", "Institution"]
    );
    assert_eq!(v.cell(0, 0), Some("Bob Lee"));
    assert_eq!(v.cell(0, 5), Some("UBC"));
}

#[test]
fn no_match_is_ready_and_empty() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n{ROWS}"));

    let out = render(&mut DatasetCache::new(), &path, &SearchOptions::new("", "quantum", KeywordField::ALL));
    let v = out.results().unwrap();
    assert!(v.is_empty());
    assert_eq!(v.summary().total, 3);
    assert_eq!(v.column_count(), 6);
}

#[test]
fn repeated_passes_reuse_the_cached_table() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n{ROWS}"));
    let mut cache = DatasetCache::new();

    for q in ["", "a", "wintink", ""] {
        let out = render(&mut cache, &path, &SearchOptions::new(q, "", KeywordField::DEFAULT));
        assert!(out.results().is_some());
    }
    assert_eq!(cache.stats().loads, 1);
    assert_eq!(cache.stats().hits, 3);
}
