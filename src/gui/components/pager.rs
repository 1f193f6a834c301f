// src/gui/components/pager.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(widget) = app.widget.as_mut() else { return };

    let mut clicked = None;
    ui.horizontal(|ui| {
        for link in widget.controls() {
            if ui.selectable_label(link.active, link.label()).clicked() && !link.active {
                clicked = Some(link.index);
            }
        }
        ui.separator();
        ui.label(format!(
            "{} of {} card(s), page {}/{}",
            widget.visible().len(),
            widget.cards().len(),
            widget.current_page() + 1,
            widget.page_count().max(1)
        ));
    });

    if let Some(index) = clicked {
        if let Err(e) = widget.change_page(index) {
            loge!("UI: {}", e);
        }
    }
}
