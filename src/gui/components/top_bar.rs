// src/gui/components/top_bar.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut load = false;

    ui.horizontal(|ui| {
        ui.label("Cards:");
        ui.add(egui::TextEdit::singleline(&mut app.state.source_path_text).desired_width(260.0));

        ui.label("Options:");
        ui.add(egui::TextEdit::singleline(&mut app.state.options_path_text).desired_width(200.0));

        ui.label("Container:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.container_text)
                .hint_text("#id / .class / tag")
                .desired_width(120.0),
        );

        if ui.button("Load").clicked() {
            load = true;
        }
    });

    ui.label(app.status_text());

    if load {
        logf!("UI: Load clicked ({})", app.state.source_path_text);
        app.load();
    }
}
