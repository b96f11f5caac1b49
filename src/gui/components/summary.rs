// src/gui/components/summary.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(results) = app.results() else { return };
    let summary = results.summary();

    ui.columns(2, |cols| {
        metric(&mut cols[0], "Total rows", summary.total_label());
        metric(&mut cols[1], "Matches", summary.matched_label());
    });
}

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(28.0).strong());
    });
}
