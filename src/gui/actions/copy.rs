// src/gui/actions/copy.rs
use eframe::egui;

use crate::{export, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    // pick up on-disk changes since the last pass
    app.rerender();

    let txt = {
        let Some(results) = app.results() else {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but there are no results");
            return;
        };
        if results.is_empty() {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but no rows match");
            return;
        }

        logf!("Copy: rows={}, columns={}", results.row_count(), results.column_count());
        export::to_clipboard_text(results)
    };

    match txt {
        Ok(txt) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
