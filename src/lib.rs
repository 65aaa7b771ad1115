// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod progress;

pub mod archive;
pub mod dataset;
pub mod file;
pub mod gui;
pub mod ranking;
pub mod render;
pub mod store;
pub mod tables;
