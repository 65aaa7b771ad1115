// src/gui/components/mod.rs
pub mod event_panel;
pub mod export_bar;
pub mod ranking_table;
