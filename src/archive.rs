// src/archive.rs
//
// Reads the export zip into a table `Bundle`. Only the tables the ranking
// needs are decompressed; the archive carries several more.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::config::consts::{REQUIRED_TABLES, TABLE_FILE_EXT, TABLE_FILE_PREFIX};
use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::tables::Bundle;

/// `Events` → `WCA_export_Events.tsv`
pub fn entry_name(table: &str) -> String {
    join!(TABLE_FILE_PREFIX, table, TABLE_FILE_EXT)
}

pub fn read_bundle(path: &Path) -> Result<Bundle, LoadError> {
    let file = File::open(path)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    let mut bundle = Bundle::new();

    for table in REQUIRED_TABLES {
        let name = entry_name(table);
        let mut entry = match zip.by_name(&name) {
            Ok(e) => e,
            Err(ZipError::FileNotFound) => return Err(LoadError::MissingTable(s!(table))),
            Err(e) => return Err(e.into()),
        };

        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        let text = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => {
                logd!("Archive: {name} is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        logd!("Archive: {name} ({} bytes)", text.len());
        bundle.insert(table, text);
    }

    Ok(bundle)
}

/// Read + normalize in one go; the dataset remembers where it came from.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    logf!("Archive: Preparing data from {}", path.display());
    let bundle = read_bundle(path)?;
    Ok(Dataset::from_bundle(&bundle)?.with_source(path))
}
