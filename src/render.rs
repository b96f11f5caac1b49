// src/render.rs
//
// One full pass per user interaction:
//
//     cache lookup → schema check → filter → present
//
// Front ends (GUI frame, CLI invocation) call `render` with the current
// inputs and draw whatever comes back. Any failure halts the pass with a
// single diagnostic and no results.

use std::path::Path;

use crate::config::options::SearchOptions;
use crate::error::{Diagnostic, SearchError};
use crate::filter::filter_rows;
use crate::loader::DatasetCache;
use crate::present::ResultsView;
use crate::schema::Schema;

#[derive(Clone, Debug)]
pub enum Render {
    /// The run stopped; show this and nothing else.
    Halted(Diagnostic),
    Ready(ResultsView),
}

impl Render {
    pub fn results(&self) -> Option<&ResultsView> {
        match self {
            Render::Ready(v) => Some(v),
            Render::Halted(_) => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Render::Halted(d) => Some(d),
            Render::Ready(_) => None,
        }
    }
}

pub fn render(cache: &mut DatasetCache, source: &Path, opts: &SearchOptions) -> Render {
    match search(cache, source, opts) {
        Ok(view) => Render::Ready(view),
        Err(e) => {
            loge!("Render: halted: {}", e);
            Render::Halted(Diagnostic::from(&e))
        }
    }
}

/// The same pass with the failure kept typed.
pub fn search(
    cache: &mut DatasetCache,
    source: &Path,
    opts: &SearchOptions,
) -> Result<ResultsView, SearchError> {
    let dataset = cache.get(source)?;
    if dataset.is_empty() {
        return Err(SearchError::Empty { path: source.to_path_buf() });
    }

    let schema = Schema::resolve(&dataset)?;
    let view = filter_rows(&dataset, &schema, opts);
    logd!(
        "Filter: recipient={:?} keyword={:?} fields={:?} → {}/{}",
        opts.recipient_query,
        opts.content_query,
        opts.fields,
        view.len(),
        dataset.row_count()
    );

    Ok(ResultsView::new(dataset, &schema, view))
}
