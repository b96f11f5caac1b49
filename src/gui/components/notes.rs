// src/gui/components/notes.rs
use eframe::egui;

pub fn draw(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Notes")
        .default_open(false)
        .show(ui, |ui| {
            ui.label("• Recipients contains: case-insensitive substring match on the Recipients column.");
            ui.label("• Content keyword: case-insensitive substring match across the selected fields (OR logic).");
            ui.label("• Default keyword search checks Proposal and Lay_Summary; you can add Supervisors as needed.");
        });
}
