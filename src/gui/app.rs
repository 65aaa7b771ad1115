// src/gui/app.rs
use std::{
    collections::HashSet,
    error::Error,
    path::Path,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    archive,
    config::state::AppState,
    dataset::{Dataset, Stat},
    ranking::{self, Ranking, Selection},
    store::{self, Refresh},
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Sum of WCA Ranks",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    /// Single source of truth (UI thread only)
    pub state: AppState,

    /// Immutable snapshot of the current export; replaced whole on refresh
    pub dataset: Arc<Dataset>,

    /// Result of the last query and its display strings
    pub ranking: Ranking,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    /// Status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        crate::log::init(&state.options.store.cache_dir);
        let status = Arc::new(Mutex::new(s!("Idle")));

        let mut prog = GuiProgress::new(status.clone());
        let (dataset, msg) = match store::load_dataset(&state.options.store, Some(&mut prog)) {
            Ok(Some(ds)) => (ds, s!("Ready")),
            Ok(None) => (Dataset::empty(), s!("No export cached; press Refresh to download")),
            Err(e) => {
                loge!("Init: Load failed: {e}");
                (Dataset::empty(), format!("Load error: {e}"))
            }
        };

        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            dataset: Arc::new(Dataset::empty()),
            ranking: Ranking::default(),
            headers: Vec::new(),
            rows: Vec::new(),
            status,
        };
        app.install_dataset(dataset);
        app.run_query();
        app.status(msg);

        logf!("Init: events={}, people={}", app.dataset.events().len(), app.dataset.people().len());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        let text = msg.into();
        match self.status.lock() {
            Ok(mut s) => *s = text,
            Err(poisoned) => *poisoned.into_inner() = text,
        }
    }

    pub fn status_text(&self) -> String {
        match self.status.lock() {
            Ok(s) => s.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Swap in a freshly loaded dataset. Checked events that still exist stay
    /// checked; on first load every single is checked. Callers re-run the query.
    pub fn install_dataset(&mut self, ds: Dataset) {
        self.state.gui.checked = if self.dataset.is_empty() {
            default_mask(&ds)
        } else {
            let keep: HashSet<&str> = self
                .dataset
                .events()
                .iter()
                .zip(&self.state.gui.checked)
                .filter(|(_, on)| **on)
                .map(|(e, _)| e.id.as_str())
                .collect();
            ds.events().iter().map(|e| keep.contains(e.id.as_str())).collect()
        };

        if let Some(src) = ds.source() {
            logf!("Data: Installed {}", src.display());
        }
        self.dataset = Arc::new(ds);
    }

    /// Staleness check with the configured max age. A downloaded export (or a
    /// cached one other than the shown one) is loaded and swapped in.
    /// `None` when the check or the load failed; the status says why.
    pub fn refresh_export(&mut self) -> Option<Refresh> {
        let mut prog = GuiProgress::new(self.status.clone());
        let outcome = match store::refresh(&self.state.options.store, Some(&mut prog)) {
            Ok(r) => r,
            Err(e) => {
                loge!("Refresh: Error: {e}");
                self.status(format!("Refresh error: {e}"));
                return None;
            }
        };

        let Some(path) = outcome.path().map(Path::to_path_buf) else {
            return Some(outcome);
        };
        if self.dataset.source() == Some(path.as_path()) {
            return Some(outcome);
        }

        self.status("Preparing data…");
        match archive::load_dataset(&path) {
            Ok(ds) => {
                self.install_dataset(ds);
                self.status("Ready");
                Some(outcome)
            }
            Err(e) => {
                loge!("Refresh: Load failed {}: {e}", path.display());
                self.status(format!("Load error: {e}"));
                None
            }
        }
    }

    /// Selection changed → staleness check → re-run the query → new rows.
    pub fn selection_changed(&mut self) {
        self.refresh_export();
        self.run_query();
    }

    /// Re-run the query over the current dataset and checkboxes.
    pub fn run_query(&mut self) {
        let sel = Selection::from_mask(&self.state.gui.checked);
        self.ranking = ranking::aggregate(&self.dataset, &sel);
        self.headers = self.ranking.headers(&self.dataset);
        self.rows = self.ranking.string_rows();
    }

    /// Check/uncheck every event of one statistic.
    pub fn set_all(&mut self, stat: Stat, on: bool) {
        for (flag, e) in self.state.gui.checked.iter_mut().zip(self.dataset.events()) {
            if e.key.stat == stat {
                *flag = on;
            }
        }
        logf!("UI: {} → {}", stat.label(), if on { "all" } else { "none" });
        self.selection_changed();
    }
}

/// Singles on, averages off.
pub fn default_mask(ds: &Dataset) -> Vec<bool> {
    ds.events().iter().map(|e| e.key.stat == Stat::Single).collect()
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("events")
            .resizable(false)
            .show(ctx, |ui| {
                components::event_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::ranking_table::draw(ui, self);
        });
    }
}
