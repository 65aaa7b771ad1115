// src/gui/components/ranking_table.rs
//
// Draws the ranking. Purely a view over app.headers/app.rows; column 1
// (Cuber) is text, everything else right-aligned numbers.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const NAME_COL: usize = 1;

fn initial_width(ci: usize) -> f32 {
    match ci {
        0 => 40.0,         // Pos
        NAME_COL => 180.0, // Cuber
        2 => 60.0,         // Sum
        _ => 55.0,         // event ranks
    }
}

fn cell(ui: &mut egui::Ui, ci: usize, text: RichText) {
    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
    if ci == NAME_COL {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
    } else {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    if app.dataset.is_empty() {
        ui.label("No export loaded.");
        return;
    }
    if app.ranking.selection.is_empty() {
        ui.label("Select at least one event.");
        return;
    }

    let cols = app.headers.len();
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("ranking_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                // Reset widths when the event columns change
                .id_salt(("ranking_table", &app.headers));
            for ci in 0..cols {
                table = table.column(
                    Column::initial(initial_width(ci)).resizable(true).clip(true).at_least(24.0),
                );
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in app.headers.iter().enumerate() {
                        header.col(|ui| {
                            cell(ui, ci, RichText::new(h.as_str()).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.rows.len(), |mut row| {
                        let Some(data) = app.rows.get(row.index()) else { return };
                        for (ci, text) in data.iter().enumerate() {
                            row.col(|ui| {
                                cell(ui, ci, RichText::new(text.as_str()));
                            });
                        }
                    });
                });
        });
}
