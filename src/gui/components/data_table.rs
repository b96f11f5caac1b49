// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view: reads the ResultsView from the last
// render pass, borrows cells from the shared dataset row by row.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{COL_LAY_SUMMARY, COL_PROPOSAL, COL_RECIPIENTS, COL_SUPERVISORS};
use crate::gui::app::App;

const ROW_HEIGHT: f32 = 20.0;

fn initial_width(header: &str) -> f32 {
    match header {
        COL_RECIPIENTS | COL_SUPERVISORS => 180.0,
        COL_PROPOSAL => 280.0,
        COL_LAY_SUMMARY => 360.0,
        _ => 120.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading("Results");

    let Some(results) = app.results() else { return };
    if results.is_empty() {
        ui.weak("No rows match the current filters.");
        return;
    }

    let headers: Vec<&str> = results.headers().collect();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("results_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for h in &headers {
                table = table.column(
                    Column::initial(initial_width(h)).resizable(true).clip(true).at_least(40.0),
                );
            }

            table
                .header(24.0, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.add(egui::Label::new(RichText::new(*h).strong()).selectable(false));
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, results.row_count(), |mut row| {
                        let r = row.index();
                        for c in 0..headers.len() {
                            let cell = results.cell(r, c);
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                if let Some(text) = cell {
                                    // long summaries are clipped; hover shows all
                                    ui.label(text).on_hover_text(text);
                                }
                            });
                        }
                    });
                });
        });
}
