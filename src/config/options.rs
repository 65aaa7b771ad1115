// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub export: ExportOptions,
    pub events: EventSelector,
}

/* ---------------- Store ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Where exports (and the debug log) are kept
    pub cache_dir: PathBuf,
    pub listing_url: String,
    pub download_base: String,
    /// A cached export younger than this is not re-checked
    pub max_age: Duration,
    /// Skip the network check entirely
    pub offline: bool,
    /// Load this archive instead of the newest cached one
    pub archive: Option<PathBuf>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(STORE_DIR),
            listing_url: s!(LISTING_URL),
            download_base: s!(DOWNLOAD_BASE),
            max_age: Duration::from_secs(MAX_EXPORT_AGE_SECS),
            offline: false,
            archive: None,
        }
    }
}

/* ---------------- Event selection ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EventSelector {
    #[default]
    Singles,
    Averages,
    All,
    /// Event ids in display order of the user's choosing, e.g. `333`, `333A`
    Ids(Vec<String>),
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    /// speedsolving.com forum table markup
    Forum,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Forum => "txt",
        }
    }

    /// Cell separator for delimited formats; `None` for markup.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Forum => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
            ExportFormat::Forum => "Forum",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "forum" | "bbcode" => Some(ExportFormat::Forum),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
