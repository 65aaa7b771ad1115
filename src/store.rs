// src/store.rs
//
// Local cache of WCA exports.
//
// - Cached exports are `WCA_export<n>_<date>.tsv.zip` files in the cache dir;
//   the newest is the greatest name.
// - A cached export touched within `max_age` is trusted as current.
// - Otherwise the listing page names the current export; it's downloaded if
//   missing (older ones are removed), or just touched if already here.
// - Listing failures are logged and skipped; whatever is cached stays in use.

use std::{
    error::Error,
    fs::{self, File},
    io,
    path::{Path, PathBuf},
    sync::LazyLock,
    time::{Duration, SystemTime},
};

use regex::Regex;

use crate::{
    archive,
    config::consts::EXPORT_NAME_PATTERN,
    config::options::StoreOptions,
    core::net,
    dataset::Dataset,
    file::ensure_directory,
    progress::Progress,
};

static EXPORT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXPORT_NAME_PATTERN).expect("export name pattern"));

static EXPORT_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{EXPORT_NAME_PATTERN}$")).expect("export file pattern")
});

/// Outcome of a staleness check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// Newest cached export is young enough; no network
    Fresh(PathBuf),
    /// Network check disabled (offline, or a fixed archive was given)
    Offline,
    /// Listing names an export we already have
    Current(PathBuf),
    /// Listing named a new export and it was downloaded
    Downloaded(PathBuf),
    /// Listing page unavailable/unusable; nothing changed
    Skipped(String),
}

impl Refresh {
    pub fn updated(&self) -> bool {
        matches!(self, Refresh::Downloaded(_))
    }

    /// Export the check landed on, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Refresh::Fresh(p) | Refresh::Current(p) | Refresh::Downloaded(p) => Some(p),
            Refresh::Offline | Refresh::Skipped(_) => None,
        }
    }
}

pub fn is_export_name(name: &str) -> bool {
    EXPORT_FILE.is_match(name)
}

/// First export file name mentioned on the listing page.
pub fn latest_export_name(html: &str) -> Option<&str> {
    EXPORT_NAME.find(html).map(|m| m.as_str())
}

/// Cached exports in `dir`, oldest first. A missing dir is just empty.
pub fn local_exports(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        let matches = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(is_export_name)
            .unwrap_or(false);
        if matches {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

pub fn newest_local(dir: &Path) -> io::Result<Option<PathBuf>> {
    Ok(local_exports(dir)?.pop())
}

/// Modified within `max_age`. Unreadable mtimes count as stale; mtimes in
/// the future count as fresh.
pub fn is_fresh(path: &Path, max_age: Duration) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };
    match SystemTime::now().duration_since(modified) {
        Ok(age) => age <= max_age,
        Err(_) => true,
    }
}

fn touch(path: &Path) -> io::Result<()> {
    File::options().write(true).open(path)?.set_modified(SystemTime::now())
}

fn download_url(base: &str, name: &str) -> String {
    if base.ends_with('/') { join!(base, name) } else { join!(base, "/", name) }
}

/// Make sure the cache holds the current export (see module docs).
/// Errors only for local I/O and failed downloads.
pub fn refresh(
    opts: &StoreOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Refresh, Box<dyn Error>> {
    if opts.offline || opts.archive.is_some() {
        logd!("Store: Offline, skipping export check");
        return Ok(Refresh::Offline);
    }

    let dir = &opts.cache_dir;
    ensure_directory(dir)?;
    let here = local_exports(dir)?;

    if let Some(newest) = here.last() {
        if is_fresh(newest, opts.max_age) {
            logd!("Store: {} is fresh", newest.display());
            return Ok(Refresh::Fresh(newest.clone()));
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log("Checking for a newer export…");
    }

    let listing = match net::get_text(&opts.listing_url) {
        Ok(t) => t,
        Err(e) => {
            loge!("Store: Failed looking for the newest export: {e}");
            return Ok(Refresh::Skipped(format!("listing unavailable: {e}")));
        }
    };
    let Some(current) = latest_export_name(&listing) else {
        loge!("Store: No export link on {}", opts.listing_url);
        return Ok(Refresh::Skipped(s!("no export link on listing page")));
    };

    let target = dir.join(current);
    if target.is_file() {
        touch(&target)?;
        logf!("Store: {current} is current");
        return Ok(Refresh::Current(target));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Downloading export {current}…"));
    }
    logf!("Store: Downloading {current}");
    net::download(
        &download_url(&opts.download_base, current),
        &target,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    )?;

    for old in here.iter().filter(|h| **h != target) {
        match fs::remove_file(old) {
            Ok(()) => logd!("Store: Removed stale {}", old.display()),
            Err(e) => loge!("Store: Could not remove {}: {e}", old.display()),
        }
    }

    Ok(Refresh::Downloaded(target))
}

/// Refresh (best-effort), then load the chosen or newest cached export.
/// `Ok(None)` when there's nothing to load.
pub fn load_dataset(
    opts: &StoreOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Option<Dataset>, Box<dyn Error>> {
    let path = match &opts.archive {
        Some(p) => Some(p.clone()),
        None => {
            match refresh(opts, progress.as_mut().map(|p| &mut **p as &mut dyn Progress)) {
                Ok(r) => logd!("Store: Refresh → {:?}", r),
                Err(e) => loge!("Store: Refresh failed, using cache: {e}"),
            }
            newest_local(&opts.cache_dir)?
        }
    };

    let Some(path) = path else {
        logf!("Store: No export available in {}", opts.cache_dir.display());
        return Ok(None);
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log("Preparing data…");
    }
    let ds = archive::load_dataset(&path)?;
    Ok(Some(ds))
}
