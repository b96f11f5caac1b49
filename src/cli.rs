// src/cli.rs
//
// One-shot front end: run a single render pass with the given inputs, print
// the counts, write the export file.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::config::consts::{CSV_PATH_ENV, DEFAULT_CSV_PATH, DEFAULT_OUT_DIR};
use crate::config::options::{ExportOptions, SearchOptions};
use crate::error::Diagnostic;
use crate::export;
use crate::loader::DatasetCache;
use crate::render;
use crate::schema::KeywordField;

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Search the BONF recipients table and export the matches")]
pub struct Args {
    /// CSV file to search
    #[arg(long, env = CSV_PATH_ENV, default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Case-insensitive substring of the Recipients column
    #[arg(short, long, default_value = "")]
    pub recipient: String,

    /// Case-insensitive substring searched in the selected fields
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// Fields the keyword is searched in (comma separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = KeywordField::DEFAULT)]
    pub fields: Vec<KeywordField>,

    /// Directory the results file is written to
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: String,

    /// Also print the results as CSV on stdout
    #[arg(long)]
    pub print: bool,

    /// Skip writing the results file
    #[arg(long)]
    pub no_export: bool,
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let opts = SearchOptions::new(&*args.recipient, &*args.keyword, args.fields.iter().copied());
    let mut export_opts = ExportOptions::default();
    export_opts.set_dir(&args.out_dir);

    logf!("CLI: source={} options={:?}", args.csv.display(), opts);

    let mut cache = DatasetCache::new();
    let results = match render::search(&mut cache, &args.csv, &opts) {
        Ok(r) => r,
        Err(e) => {
            loge!("CLI: halted: {}", e);
            return Err(eyre!(Diagnostic::from(&e).to_string()));
        }
    };

    let summary = results.summary();
    println!("Total rows: {}", summary.total_label());
    println!("Matches: {}", summary.matched_label());

    if args.print {
        let text = export::to_clipboard_text(&results).wrap_err("rendering results as CSV")?;
        print!("{text}");
    }

    if !args.no_export {
        let path = export::write_export(export_opts.out_dir(), &results)
            .wrap_err("writing results file")?;
        logf!("CLI: wrote {}", path.display());
        println!("Wrote {}", path.display());
    }

    Ok(())
}
