// src/loader.rs
//
// Reads the source CSV into a `Dataset` and memoizes it per file version.
//
// - Decoding is lossy-but-available: byte sequences that are not valid UTF-8
//   are dropped, never replaced, and never abort the load.
// - `DatasetCache` is the only state that outlives a render pass. It maps a
//   path to the dataset loaded from it, stamped with the file's (mtime, len);
//   a changed stamp means the file is read again.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use csv::ReaderBuilder;

use crate::dataset::Dataset;
use crate::error::LoadError;

const BOM: char = '\u{feff}';

/// Read and parse `path` without any caching.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = fs::read(path).map_err(|e| classify_io(path, e))?;
    let text = decode_lossy(&bytes);
    let ds = parse_table(path, &text)?;
    logf!(
        "Load: {} (rows={}, columns={})",
        path.display(),
        ds.row_count(),
        ds.column_count()
    );
    Ok(ds)
}

/// UTF-8 decode that silently skips invalid byte sequences and a leading BOM.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    match out.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => out,
    }
}

fn classify_io(path: &Path, e: io::Error) -> LoadError {
    if e.kind() == io::ErrorKind::NotFound {
        LoadError::FileNotFound { path: path.to_path_buf() }
    } else {
        LoadError::Parse { path: path.to_path_buf(), message: e.to_string() }
    }
}

fn parse_table(path: &Path, text: &str) -> Result<Dataset, LoadError> {
    let parse_err = |message: String| LoadError::Parse { path: path.to_path_buf(), message };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|e| parse_err(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if raw_headers.is_empty() {
        return Err(parse_err("No columns to parse from file".to_string()));
    }
    let headers = dedupe_headers(raw_headers);
    let width = headers.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_err(e.to_string()))?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(parse_err(format!(
                "Error tokenizing data. Expected {} fields in line {}, saw {}",
                width,
                line,
                record.len()
            )));
        }
        rows.push(record.iter().map(|v| v.to_string()).collect());
    }

    Ok(Dataset::from_text_rows(headers, rows))
}

/// Repeated header names get a numeric suffix: `X`, `X.1`, `X.2`, ...
fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(raw.len());

    for name in raw {
        let seen = counts.get(&name).copied().unwrap_or(0);
        if seen == 0 {
            counts.insert(name.clone(), 1);
            out.push(name);
            continue;
        }

        let mut n = seen;
        let mut candidate = format!("{name}.{n}");
        while counts.contains_key(&candidate) {
            n += 1;
            candidate = format!("{name}.{n}");
        }
        counts.insert(name, n + 1);
        counts.insert(candidate.clone(), 1);
        out.push(candidate);
    }
    out
}

/* ---------------- Memoization ---------------- */

/// Identity of one version of a file on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl SourceStamp {
    pub fn of(path: &Path) -> Result<Self, LoadError> {
        let meta = fs::metadata(path).map_err(|e| classify_io(path, e))?;
        Ok(Self { modified: meta.modified().ok(), len: meta.len() })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from memory.
    pub hits: u64,
    /// Lookups that read the file.
    pub loads: u64,
}

struct CacheEntry {
    stamp: SourceStamp,
    dataset: Arc<Dataset>,
}

/// Memo table: source path → dataset loaded from its current version.
/// Failed loads are not remembered.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
    stats: CacheStats,
}

impl DatasetCache {
    pub fn new() -> Self { Self::default() }

    pub fn get(&mut self, path: &Path) -> Result<Arc<Dataset>, LoadError> {
        let stamp = match SourceStamp::of(path) {
            Ok(s) => s,
            Err(e) => {
                self.entries.remove(path);
                return Err(e);
            }
        };

        if let Some(entry) = self.entries.get(path) {
            if entry.stamp == stamp {
                self.stats.hits += 1;
                logd!("Cache: hit {}", path.display());
                return Ok(Arc::clone(&entry.dataset));
            }
            logf!("Cache: {} changed on disk, reloading", path.display());
        }

        let dataset = match load_dataset(path) {
            Ok(ds) => Arc::new(ds),
            Err(e) => {
                self.entries.remove(path);
                return Err(e);
            }
        };
        self.stats.loads += 1;
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry { stamp, dataset: Arc::clone(&dataset) },
        );
        Ok(dataset)
    }

    /// Forget one source. Returns whether it was cached.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) { self.entries.clear(); }

    pub fn stats(&self) -> CacheStats { self.stats }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
