// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + Include headers ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            for fmt in [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Forum] {
                ui.selectable_value(&mut export.format, fmt, fmt.label());
            }

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.state.gui.out_path_dirty {
                app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output path ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
    });

    // --- Actions (Copy / Export / Refresh) ---
    let mut copy = false;
    let mut export = false;
    let mut refresh = false;

    ui.horizontal(|ui| {
        copy = ui.button("Copy").clicked();
        export = ui.button("Export").clicked();
        refresh = ui.button("Refresh data").clicked();

        ui.separator();

        let source = app
            .dataset
            .source()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!("no export"));
        ui.label(format!("{source} | {} shown | Status: {}", app.ranking.rows.len(), app.status_text()));
    });

    if copy {
        actions::copy(app, ui.ctx());
    }
    if export {
        actions::export(app);
    }
    if refresh {
        logf!("UI: Refresh clicked");
        actions::refresh(app);
    }
}
