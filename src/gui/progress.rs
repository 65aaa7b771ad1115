// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    total: Option<u64>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, total: None }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        match self.status.lock() {
            Ok(mut s) => *s = text,
            Err(poisoned) => *poisoned.into_inner() = text,
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total_bytes: Option<u64>) {
        self.total = total_bytes;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn advance(&mut self, done_bytes: u64) {
        let mb = done_bytes as f64 / 1_048_576.0;
        match self.total.filter(|t| *t > 0) {
            Some(t) => self.set_status(format!("Downloading… {:.1} MB ({}%)", mb, done_bytes * 100 / t)),
            None => self.set_status(format!("Downloading… {:.1} MB", mb)),
        }
    }
    fn finish(&mut self) {
        self.set_status(s!("Download complete"));
    }
}
