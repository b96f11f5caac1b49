// src/gui/components/filter_panel.rs
//
// Left side panel: the three filter inputs. Writes straight into
// app.state.options.search; the app notices the change and re-renders.

use eframe::egui;

use crate::gui::app::App;
use crate::schema::KeywordField;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.add_space(4.0);

    let search = &mut app.state.options.search;

    ui.label("Recipients contains");
    if ui
        .add(egui::TextEdit::singleline(&mut search.recipient_query).hint_text("e.g., Wintink"))
        .changed()
    {
        logd!("UI: recipient_query → {:?}", search.recipient_query);
    }

    ui.add_space(6.0);
    ui.label("Content keyword");
    if ui
        .add(egui::TextEdit::singleline(&mut search.content_query).hint_text("e.g., neurofeedback"))
        .changed()
    {
        logd!("UI: content_query → {:?}", search.content_query);
    }

    ui.add_space(6.0);
    ui.label("Search keyword in:");
    for field in KeywordField::ALL {
        let mut on = search.has_field(field);
        if ui.checkbox(&mut on, field.label()).changed() {
            search.set_field(field, on);
            logf!("UI: keyword fields → {:?}", search.fields);
        }
    }
    if search.fields.is_empty() && !search.content_query.trim().is_empty() {
        ui.weak("No field selected: keyword is ignored");
    }

    ui.separator();

    if ui.button("Clear filters").clicked() {
        *search = Default::default();
        logf!("UI: filters cleared");
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        if ui.button("Reload file").clicked() {
            app.reload();
        }
        ui.weak(app.state.source.display().to_string());
    });
}
