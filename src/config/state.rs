// src/config/state.rs
use std::env;
use std::path::PathBuf;

use super::consts::{CSV_PATH_ENV, DEFAULT_CSV_PATH};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Output directory as typed; applied to ExportOptions on export.
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 800,
            out_dir_text: String::new(),
            out_dir_dirty: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    /// The CSV being searched; fixed for the life of the process.
    pub source: PathBuf,
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_source(DEFAULT_CSV_PATH)
    }
}

impl AppState {
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        let options = AppOptions::default();
        let gui = GuiState {
            out_dir_text: options.export.out_dir().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { source: source.into(), options, gui }
    }

    /// Source path from `BONF_CSV_PATH`, else the bundled default name.
    pub fn from_env() -> Self {
        match env::var_os(CSV_PATH_ENV) {
            Some(p) if !p.is_empty() => Self::with_source(p),
            _ => Self::default(),
        }
    }
}
