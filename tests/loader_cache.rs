// tests/loader_cache.rs
mod common;

use std::fs;
use std::sync::Arc;

use bonf_search::error::LoadError;
use bonf_search::loader::{load_dataset, DatasetCache};
use tempfile::tempdir;

use common::{write_file, HEADER};

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let err = load_dataset(&path).unwrap_err();
    assert_eq!(err, LoadError::FileNotFound { path: path.clone() });
    assert!(err.to_string().starts_with("File not found: "));

    let mut cache = DatasetCache::new();
    assert!(matches!(cache.get(&path), Err(LoadError::FileNotFound { .. })));
    assert!(cache.is_empty());
}

#[test]
fn overlong_row_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "bad.csv", "a,b\n1,2\n3,4,5\n");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "{err:?}");
    assert!(err.to_string().starts_with("Could not read CSV: "));
}

#[test]
fn zero_byte_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "empty.csv", "");
    assert!(matches!(load_dataset(&path), Err(LoadError::Parse { .. })));
}

#[test]
fn invalid_utf8_is_dropped_not_fatal() {
    let dir = tempdir().unwrap();
    let mut bytes = format!("{HEADER}\n").into_bytes();
    bytes.extend_from_slice(b"2021,Zo\xFF\xFEe,X,Dr. A,P,L\n");
    let path = write_file(dir.path(), "latin.csv", bytes);

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.row_count(), 1);
    let col = ds.column_index("Recipients").unwrap();
    assert_eq!(ds.cell(0, col), Some("Zoe"));
}

#[test]
fn leading_bom_does_not_leak_into_first_header() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "bom.csv", format!("\u{feff}{HEADER}\n2021,A,B,C,D,E\n"));

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.headers()[0], "Year");
}

#[test]
fn quoted_fields_keep_commas_and_newlines() {
    let dir = tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "quoted.csv",
        format!("{HEADER}\n2021,\"Lee, Bob\",X,,\"line one\nline two\",\n"),
    );

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.cell(0, 1), Some("Lee, Bob"));
    assert_eq!(ds.cell(0, 3), None);
    assert_eq!(ds.cell(0, 4), Some("line one\nline two"));
    assert_eq!(ds.cell(0, 5), None);
}

#[test]
fn duplicate_headers_are_suffixed() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "dup.csv", "Notes,Recipients,Notes\n1,2,3\n");

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.headers(), ["Notes", "Recipients", "Notes.1"]);
}

#[test]
fn second_lookup_is_served_from_memory() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n2021,A,B,C,D,E\n"));

    let mut cache = DatasetCache::new();
    let first = cache.get(&path).unwrap();
    let second = cache.get(&path).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    let stats = cache.stats();
    assert_eq!((stats.loads, stats.hits), (1, 1));
}

#[test]
fn changed_file_is_reloaded() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n2021,A,B,C,D,E\n"));

    let mut cache = DatasetCache::new();
    assert_eq!(cache.get(&path).unwrap().row_count(), 1);

    // different length, so the stamp changes even on coarse mtime clocks
    fs::write(&path, format!("{HEADER}\n2021,A,B,C,D,E\n2022,F,G,H,I,J\n")).unwrap();
    assert_eq!(cache.get(&path).unwrap().row_count(), 2);
    assert_eq!(cache.stats().loads, 2);
}

#[test]
fn failures_are_not_cached() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", "a,b\n1,2,3\n");

    let mut cache = DatasetCache::new();
    assert!(cache.get(&path).is_err());
    assert!(cache.is_empty());

    fs::write(&path, format!("{HEADER}\n2021,A,B,C,D,E\n")).unwrap();
    assert_eq!(cache.get(&path).unwrap().row_count(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn deleted_file_evicts_entry() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n2021,A,B,C,D,E\n"));

    let mut cache = DatasetCache::new();
    cache.get(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(matches!(cache.get(&path), Err(LoadError::FileNotFound { .. })));
    assert!(cache.is_empty());
}

#[test]
fn invalidate_forces_a_fresh_read() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "t.csv", format!("{HEADER}\n2021,A,B,C,D,E\n"));

    let mut cache = DatasetCache::new();
    let first = cache.get(&path).unwrap();
    assert!(cache.invalidate(&path));
    assert!(!cache.invalidate(&path));

    let second = cache.get(&path).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    assert_eq!(cache.stats().loads, 2);
}

#[test]
fn clear_drops_every_source() {
    let dir = tempdir().unwrap();
    let a = write_file(dir.path(), "a.csv", format!("{HEADER}\n2021,A,B,C,D,E\n"));
    let b = write_file(dir.path(), "b.csv", format!("{HEADER}\n2022,F,G,H,I,J\n"));

    let mut cache = DatasetCache::new();
    cache.get(&a).unwrap();
    cache.get(&b).unwrap();
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
    cache.get(&a).unwrap();
    assert_eq!(cache.stats().loads, 3);
}
