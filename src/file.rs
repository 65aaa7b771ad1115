// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::dataset::Dataset;
use crate::ranking::Ranking;
use crate::render;

/// Render the ranking per ExportOptions and write it to `export.out_path()`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    ds: &Dataset,
    ranking: &Ranking,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    write_text(&path, &render::render(export, ds, ranking))?;
    logf!(
        "Export: OK format={:?} rows={} → {}",
        export.format,
        ranking.rows.len(),
        path.display()
    );
    Ok(path)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
