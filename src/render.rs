// src/render.rs
//
// Text renderings of a Ranking for Copy/Export: CSV, TSV and forum-table
// markup. Display strings come from `Ranking::string_rows`; nothing here
// touches the dataset beyond column headers.

use std::io::{self, Write};

use crate::config::options::ExportOptions;
use crate::dataset::Dataset;
use crate::ranking::{Ranking, Row};

/* ---------------- Delimited ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{sep}")?; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

pub fn to_delimited(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/* ---------------- Forum markup ---------------- */

enum Cell<'a> {
    Text(&'a str),
    Num(u64),
}

fn td(out: &mut String, cell: Cell<'_>) {
    match cell {
        Cell::Text(t) => {
            out.push_str("[TD=align:left]");
            out.push_str(t);
        }
        Cell::Num(n) => {
            out.push_str("[TD]");
            out.push_str(&n.to_string());
        }
    }
    out.push_str("[/TD]");
}

fn forum_row(out: &mut String, row: &Row) {
    out.push_str("[TR]");
    match row.position {
        Some(p) => td(out, Cell::Num(u64::from(p))),
        None => td(out, Cell::Text("")),
    }
    td(out, Cell::Text(&row.name));
    td(out, Cell::Num(row.score));
    for &r in &row.ranks {
        td(out, Cell::Num(u64::from(r)));
    }
    out.push_str("[/TR]\n");
}

/// speedsolving.com table: text cells left-aligned, numbers right (table default).
pub fn to_forum(ds: &Dataset, ranking: &Ranking, include_headers: bool) -> String {
    let mut out = format!("[SPOILER=Sum of Ranks (\"{}\")]\n", ranking.title(ds));
    out.push_str("[TABLE=\"class:grid, align:right\"]\n");

    if include_headers {
        out.push_str("[TR]");
        for h in ranking.headers(ds) {
            out.push_str("[TD][B]");
            out.push_str(&h);
            out.push_str("[/B][/TD]");
        }
        out.push_str("[/TR]\n");
    }
    for row in &ranking.rows {
        forum_row(&mut out, row);
    }

    out.push_str("[/TABLE][/SPOILER]\n");
    out
}

/* ---------------- Dispatch ---------------- */

/// Full Copy/Export text for the chosen format.
pub fn render(export: &ExportOptions, ds: &Dataset, ranking: &Ranking) -> String {
    let Some(sep) = export.format.delimiter() else {
        return to_forum(ds, ranking, export.include_headers);
    };
    let headers = ranking.headers(ds);
    let headers = export.include_headers.then_some(headers.as_slice());
    to_delimited(headers, &ranking.string_rows(), sep)
}
