// src/cli.rs
use std::{error::Error, io::Write, path::PathBuf};

use crate::{
    config::options::{AppOptions, EventSelector, ExportFormat},
    file,
    progress::Progress,
    ranking::{self, Selection},
    render, store,
};

#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub options: AppOptions,
    /// Write here instead of stdout
    pub out: Option<PathBuf>,
    pub list_events: bool,
    pub help: bool,
}

pub fn help_text() -> &'static str {
    include_str!("cli_help.txt")
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--events" => {
                let v = args.next().ok_or("Missing value for --events")?;
                let ids = parse_event_list(&v);
                if ids.is_empty() { return Err("Empty --events list".into()); }
                cli.options.events = EventSelector::Ids(ids);}
            "--singles" => cli.options.events = EventSelector::Singles,
            "--averages" => cli.options.events = EventSelector::Averages,
            "--all" | "-a" => cli.options.events = EventSelector::All,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                cli.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {v}"))?;}
            "--include-headers" => cli.options.export.include_headers = true,
            "--no-headers" => cli.options.export.include_headers = false,
            "-o" | "--out" => cli.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--cache-dir" => {
                cli.options.store.cache_dir = PathBuf::from(args.next().ok_or("Missing value for --cache-dir")?);}
            "--offline" => cli.options.store.offline = true,
            "--archive" => {
                cli.options.store.archive = Some(PathBuf::from(args.next().ok_or("Missing value for --archive")?));}
            "--list-events" => cli.list_events = true,
            "-h" | "--help" => cli.help = true,
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(cli)
}

/// "333, 444 ,,333A" → ["333", "444", "333A"]
fn parse_event_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

pub fn run(cli: CliArgs) -> Result<(), Box<dyn Error>> {
    let stdout = std::io::stdout();
    run_to(cli, &mut stdout.lock())
}

/// `run`, with everything meant for stdout (help, event list, rendered
/// ranking) going to `out`. Progress and notes stay on stderr.
pub fn run_to<W: Write>(cli: CliArgs, out: &mut W) -> Result<(), Box<dyn Error>> {
    if cli.help {
        writeln!(out, "{}", help_text())?;
        return Ok(());
    }

    let opts = &cli.options;
    crate::log::init(&opts.store.cache_dir);
    logf!("CLI: events={:?} format={:?} out={:?}", opts.events, opts.export.format, cli.out);

    let mut progress = CliProgress::default();
    let ds = store::load_dataset(&opts.store, Some(&mut progress))?
        .ok_or("No export cached and none could be downloaded")?;

    if cli.list_events {
        for (i, e) in ds.events().iter().enumerate() {
            writeln!(out, "{}\t{}\t{} ({})", i, e.id, e.name, e.key.stat.label())?;
        }
        return Ok(());
    }

    let selection = Selection::from_selector(&ds, &opts.events)?;
    let ranking = ranking::aggregate(&ds, &selection);

    match &cli.out {
        Some(path) => {
            let mut export = opts.export.clone();
            export.set_path(&path.to_string_lossy());
            let written = file::write_export(&export, &ds, &ranking)?;
            eprintln!("Wrote {} ({} rows)", written.display(), ranking.rows.len());
        }
        None => {
            write!(out, "{}", render::render(&opts.export, &ds, &ranking))?;
        }
    }
    Ok(())
}

/// Progress on stderr: status lines plus download percentage in 10% steps.
#[derive(Default)]
pub struct CliProgress {
    total: Option<u64>,
    last_decile: u64,
}

impl Progress for CliProgress {
    fn begin(&mut self, total_bytes: Option<u64>) {
        self.total = total_bytes;
        self.last_decile = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn advance(&mut self, done_bytes: u64) {
        let Some(total) = self.total.filter(|t| *t > 0) else { return };
        let decile = done_bytes.saturating_mul(10) / total;
        if decile > self.last_decile {
            self.last_decile = decile;
            eprintln!("  {}%", (decile * 10).min(100));
        }
    }
    fn finish(&mut self) {
        eprintln!("Download complete");
    }
}
