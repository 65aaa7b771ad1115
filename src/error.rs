// src/error.rs
//
// Load-time failures for the export tables. Everything above the
// table/dataset layer (store, file, gui, cli) keeps using Box<dyn Error>.

use std::io;

use thiserror::Error;
use zip::result::ZipError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] ZipError),
    /// Table file absent from the bundle/archive
    #[error("table {0} not found in export")]
    MissingTable(String),
    /// Table present but without a header line
    #[error("table {0} has no header line")]
    EmptyTable(String),
    /// Data integrity: a requested column is not in the header
    #[error("table {table} has no column '{column}'")]
    MissingColumn { table: String, column: String },
    /// Row has fewer cells than the requested columns need
    #[error("table {table}, line {line}: too few cells")]
    ShortRow { table: String, line: usize },
    /// Integer column holds something that isn't one
    #[error("table {table}, line {line}: '{value}' in column {column} is not an integer")]
    BadInt { table: String, column: String, line: usize, value: String },
    /// Rank record for an event the Events table doesn't know
    #[error("rank record for unknown event '{0}'")]
    UnknownEvent(String),
}
