// src/gui/components/card_grid.rs
//
// The cards on the page currently shown: one column per filter key, then
// the card text. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::card::{AttributeSource, Card};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(widget) = app.widget.as_ref() else { return };

    let keys: Vec<&str> = widget
        .panel()
        .selects()
        .iter()
        .map(|s| s.name.as_str())
        .filter(|k| !k.is_empty())
        .collect();

    let shown: Vec<(usize, &Card)> = widget
        .pages()
        .iter()
        .filter(|p| p.shown)
        .flat_map(|p| p.cards.iter())
        .map(|&ix| (ix, &widget.cards()[ix]))
        .collect();

    // Scroll bars take their own space instead of floating over the text
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(40.0))
        .columns(Column::initial(140.0).resizable(true).clip(true), keys.len())
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            for key in &keys {
                header.col(|ui| { ui.strong(*key); });
            }
            header.col(|ui| { ui.strong("Text"); });
        })
        .body(|body| {
            body.rows(20.0, shown.len(), |mut row| {
                let (ix, card) = shown[row.index()];
                row.col(|ui| { ui.label((ix + 1).to_string()); });
                for key in &keys {
                    row.col(|ui| { ui.label(card.data(key).unwrap_or("")); });
                }
                row.col(|ui| { ui.label(card.text()); });
            });
        });
}
