// src/export.rs
//
// Serializes the displayed table (filtered rows, display column order) back
// to CSV. The file artifact is UTF-8 with a BOM so spreadsheet tools pick the
// right encoding; the clipboard text has no BOM. Absent cells are written as
// empty fields. Nothing is kept between exports.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};

use crate::config::consts::EXPORT_FILE_NAME;
use crate::error::ExportError;
use crate::present::ResultsView;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the header and all rows of `view` to any writer.
pub fn write_table<W: Write>(w: W, view: &ResultsView) -> Result<(), ExportError> {
    let mut out = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    out.write_record(view.headers())?;
    for r in 0..view.row_count() {
        out.write_record(view.row(r).map(|c| c.unwrap_or("")))?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Bytes of the download artifact: BOM + CSV.
pub fn to_csv_bytes(view: &ResultsView) -> Result<Vec<u8>, ExportError> {
    let mut buf = UTF8_BOM.to_vec();
    write_table(&mut buf, view)?;
    Ok(buf)
}

/// CSV text for the clipboard.
pub fn to_clipboard_text(view: &ResultsView) -> Result<String, ExportError> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, view)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Write `<dir>/BONF_recipients_filtered_results.csv`, creating `dir` if needed.
/// Returns the path written to.
pub fn write_export(dir: &Path, view: &ResultsView) -> Result<PathBuf, ExportError> {
    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }
    let path = dir.join(EXPORT_FILE_NAME);
    let bytes = to_csv_bytes(view)?;
    fs::write(&path, bytes).map_err(|source| ExportError::Io { path: path.clone(), source })?;
    Ok(path)
}

fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory { path: dir.to_path_buf() });
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
