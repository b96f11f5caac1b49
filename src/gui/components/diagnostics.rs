// src/gui/components/diagnostics.rs
//
// Shown instead of everything else when the render pass halted.

use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(diag) = app.output.diagnostic() {
        let red = ui.visuals().error_fg_color;
        ui.label(RichText::new(&diag.message).color(red).strong());
        if let Some(hint) = &diag.hint {
            ui.label(RichText::new(hint).weak().small());
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Retry").clicked() {
            app.reload();
        }
        ui.weak(format!("Source: {}", app.state.source.display()));
    });
}
