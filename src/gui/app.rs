// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::{APP_HEADING, WINDOW_TITLE}, options::SearchOptions, state::AppState},
    loader::DatasetCache,
    present::ResultsView,
    render::{render, Render},
};

use super::components::{data_table, diagnostics, export_bar, filter_panel, notes, summary};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for inputs (UI thread only)
    pub state: AppState,

    // memoized dataset; the only state carried between passes
    pub cache: DatasetCache,

    // output of the last render pass, and the inputs it was computed from
    pub output: Render,
    rendered_for: SearchOptions,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut cache = DatasetCache::new();
        let output = render(&mut cache, &state.source, &state.options.search);
        let rendered_for = state.options.search.clone();

        logf!(
            "Init: source={}, ready={}",
            state.source.display(),
            output.results().is_some()
        );

        Self {
            state,
            cache,
            output,
            rendered_for,
            status: String::from("Idle"),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn results(&self) -> Option<&ResultsView> { self.output.results() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Run the pipeline again with the current inputs.
    pub fn rerender(&mut self) {
        self.output = render(&mut self.cache, &self.state.source, &self.state.options.search);
        self.rendered_for = self.state.options.search.clone();
    }

    /// Drop the cached table and read the file again.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.state.source);
        self.rerender();
        let msg = match self.results() {
            Some(r) => format!("Reloaded ({} rows)", r.summary().total_label()),
            None => String::from("Reload failed"),
        };
        logf!("UI: {}", msg);
        self.status(msg);
    }

    fn inputs_changed(&self) -> bool {
        self.state.options.search != self.rendered_for
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.output.diagnostic().is_some() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(APP_HEADING);
                ui.separator();
                diagnostics::draw(ui, self);
            });
            return;
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                filter_panel::draw(ui, self);
            });

        // Every interaction that changed an input gets one full pass.
        if self.inputs_changed() {
            self.rerender();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_HEADING);

            summary::draw(ui, self);

            ui.separator();

            export_bar::draw(ui, self);

            notes::draw(ui);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
