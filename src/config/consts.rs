// src/config/consts.rs

// Source table
pub const DEFAULT_CSV_PATH: &str = "BONF Research Table MASTER Recipients.csv";
pub const CSV_PATH_ENV: &str = "BONF_CSV_PATH";

// Schema
pub const COL_RECIPIENTS: &str = "Recipients";
pub const COL_SUPERVISORS: &str = "Supervisors";
pub const COL_PROPOSAL: &str = "Proposal";
pub const COL_LAY_SUMMARY: &str = "Lay_Summary";
pub const COLUMN_HINT_LIMIT: usize = 20;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE_NAME: &str = "BONF_recipients_filtered_results.csv";

// Local state
pub const LOG_FILE: &str = ".store/debug.log";

// GUI
pub const WINDOW_TITLE: &str = "Branch Out: Recipients Search";
pub const APP_HEADING: &str = "Branch Out Science Search";
