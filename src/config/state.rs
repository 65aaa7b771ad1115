// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// One flag per known event, indexed like `Dataset::events()`
    pub checked: Vec<bool>,

    pub window_w: f32,
    pub window_h: f32,

    /// Output path text field; mapped into ExportOptions on Export
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            checked: Vec::new(),
            window_w: 1100.0,
            window_h: 700.0,
            out_path_text: s!(),
            out_path_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
