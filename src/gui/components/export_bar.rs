// src/gui/components/export_bar.rs
//
// Output directory + Download / Copy actions + status line.

use eframe::egui;

use crate::config::consts::EXPORT_FILE_NAME;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output dir:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(260.0),
            )
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.state.gui.out_dir_text);
        }
        ui.weak(format!("/{EXPORT_FILE_NAME}"));
    });

    ui.horizontal(|ui| {
        if ui.button("Download results (CSV)").clicked() {
            actions::export(app);
        }
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        ui.label(format!("Status: {}", app.status));
    });
}
