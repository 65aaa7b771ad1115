// src/gui/components/event_panel.rs
//
// Left panel: one row per base event with Single/Average checkboxes, plus
// All/None per column. Any change re-runs the ranking query.

use eframe::egui;
use crate::dataset::Stat;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Events");

    let lines = app.dataset.event_lines();
    if lines.is_empty() {
        ui.label("No data loaded");
        return;
    }

    let mut changed = false;
    let mut bulk: Option<(Stat, bool)> = None;

    egui::ScrollArea::vertical()
        .id_salt("events_panel_scroll")
        .show(ui, |ui| {
            egui::Grid::new("event_grid")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    ui.label("");
                    ui.strong("Single");
                    ui.strong("Average");
                    ui.end_row();

                    for line in &lines {
                        ui.label(line.name.as_str());
                        for slot in [line.single, line.average] {
                            let Some(ix) = slot else {
                                ui.label("");
                                continue;
                            };
                            let tip = app.dataset.events()[ix].id.clone();
                            if let Some(flag) = app.state.gui.checked.get_mut(ix) {
                                changed |= ui.checkbox(flag, "").on_hover_text(tip).changed();
                            }
                        }
                        ui.end_row();
                    }

                    for (label, on) in [("All", true), ("None", false)] {
                        ui.label("");
                        for stat in [Stat::Single, Stat::Average] {
                            if ui.button(label).clicked() {
                                bulk = Some((stat, on));
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some((stat, on)) = bulk {
        app.set_all(stat, on);
    } else if changed {
        app.selection_changed();
        logf!(
            "UI: Selection changed ({} events)",
            app.state.gui.checked.iter().filter(|c| **c).count()
        );
    }
}
