// src/gui/actions.rs
//
// Button handlers for the export bar. Each one reports through app.status.

use eframe::egui;

use crate::{file, render, store::Refresh};

use super::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.ranking.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = render::render(&app.state.options.export, &app.dataset, &app.ranking);
    logf!(
        "Copy: format={:?}, rows={}",
        app.state.options.export.format,
        app.ranking.rows.len()
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}

pub fn export(app: &mut App) {
    // normalize out_path first
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        app.state.gui.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.state.gui.out_path_dirty = false;
        logf!("Export: Out path set → {}", app.state.gui.out_path_text);
    }

    if app.ranking.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    match file::write_export(&app.state.options.export, &app.dataset, &app.ranking) {
        Ok(path) => app.status(format!("Exported {} rows to {}", app.ranking.rows.len(), path.display())),
        Err(e) => {
            loge!("Export: Error: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Same staleness check a selection change runs; reports the outcome.
pub fn refresh(app: &mut App) {
    let Some(outcome) = app.refresh_export() else { return };
    app.run_query();

    match outcome {
        Refresh::Fresh(_) | Refresh::Current(_) => app.status("Export is current"),
        Refresh::Downloaded(p) => app.status(format!("Downloaded {}", p.display())),
        Refresh::Offline => app.status("Offline; using cached export"),
        Refresh::Skipped(reason) => app.status(format!("Refresh skipped: {reason}")),
    }
}
