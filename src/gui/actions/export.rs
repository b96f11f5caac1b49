// src/gui/actions/export.rs
use crate::{export, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out dir first (mutates app) before any &app borrows
    if app.state.gui.out_dir_dirty {
        app.state.options.export.set_dir(&app.state.gui.out_dir_text);
        logf!(
            "Export: Out dir set → {}",
            app.state.options.export.out_dir().display()
        );
        app.state.gui.out_dir_dirty = false;
    }

    // pick up on-disk changes since the last pass
    app.rerender();

    let status_msg = match app.output.results() {
        None => {
            logd!("Export: Clicked, but there are no results");
            String::from("Nothing to export")
        }
        Some(results) => {
            let dir = app.state.options.export.out_dir();
            logf!(
                "Export: Begin rows={}, columns={}, dir={}",
                results.row_count(),
                results.column_count(),
                dir.display()
            );

            match export::write_export(dir, results) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exported {} row(s) to {}", results.row_count(), path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the results borrow is gone
    app.status(status_msg);
}
