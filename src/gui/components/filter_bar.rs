// src/gui/components/filter_bar.rs
//
// One combo box per select, then the search button. Changes go through the
// widget so dependent selects are refreshed exactly as in the rendered page.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(widget) = app.widget.as_mut() else {
        ui.label("No cards loaded");
        return;
    };

    let mut change: Option<(String, String)> = None;
    let mut search = false;

    ui.horizontal_wrapped(|ui| {
        for select in widget.panel().selects() {
            let mut current = s!(select.value());

            egui::ComboBox::from_id_salt(("filter", select.name.as_str()))
                .selected_text(select.selected_label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut current, s!(), select.placeholder.as_str());
                    for opt in select.options() {
                        ui.selectable_value(&mut current, opt.value.clone(), opt.label.as_str());
                    }
                });

            if current != select.value() {
                change = Some((select.name.clone(), current));
            }
        }

        if ui.button(widget.button().text.as_str()).clicked() {
            search = true;
        }
    });

    let mut failure = None;
    if let Some((name, value)) = change {
        logf!("UI: {} → {:?}", name, value);
        if let Err(e) = widget.select(&name, &value) {
            loge!("UI: {}", e);
            failure = Some(e.to_string());
        }
    }
    if search {
        widget.search();
    }

    if let Some(msg) = failure {
        app.status(msg);
    }
}
