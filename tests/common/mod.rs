// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bonf_search::config::options::SearchOptions;
use bonf_search::dataset::Dataset;
use bonf_search::filter::{filter_rows, FilteredView};
use bonf_search::schema::Schema;

pub const HEADER: &str = "Year,Recipients,Institution,Supervisors,Proposal,Lay_Summary";

pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, contents).unwrap();
    p
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

/// Small recipients table; note the required columns are not in front.
pub fn sample() -> Arc<Dataset> {
    let headers = strings(&["Year", "Recipients", "Institution", "Supervisors", "Proposal", "Lay_Summary"]);
    let rows = vec![
        strings(&["2021", "Alice Wintink", "Queen's", "Dr. Stone", "Neurofeedback study", "Training the brain"]),
        strings(&["2021", "Bob Lee", "UBC", "Dr. Neumann", "Robotics", "Walking machines"]),
        strings(&["2022", "", "McGill", "Dr. Park", "Sleep and NEURONS", ""]),
        strings(&["2022", "Carla WINTINK", "Calgary", "", "", "Neuro imaging for kids"]),
        strings(&["2023", "Dev Patel", "", "Dr. Wintink", "Gait analysis", "How we walk"]),
    ];
    Arc::new(Dataset::from_text_rows(headers, rows))
}

pub fn schema(ds: &Dataset) -> Schema {
    Schema::resolve(ds).unwrap()
}

pub fn run(ds: &Dataset, opts: &SearchOptions) -> FilteredView {
    filter_rows(ds, &schema(ds), opts)
}
