// src/progress.rs
/// Lightweight progress reporting used by long-running operations (refresh/download).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when a download starts, with its size if the server sent one.
    fn begin(&mut self, _total_bytes: Option<u64>) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Bytes received so far.
    fn advance(&mut self, _done_bytes: u64) {}

    /// Called once the whole body has been written.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
