// src/tables.rs
//
// Tab-separated tables as they come out of the export archive.
//
// - Bundle: raw table texts keyed by table name ("Events", "Persons", ...).
// - Table:  one parsed header + the untouched body text (borrowed).
// - Selected / Record: the requested columns of every data row, in request
//   order. Cells stay `&str` until the caller asks for a type (`text`,
//   `int`, `uint`), so each loader declares its own column schema.
//
// Cells are taken literally: no quoting, no escaping. Blank lines are
// skipped and CRLF endings tolerated.

use std::collections::HashMap;

use crate::error::LoadError;

#[derive(Clone, Debug, Default)]
pub struct Bundle {
    tables: HashMap<String, String>,
}

impl Bundle {
    pub fn new() -> Self { Self::default() }

    pub fn from_tables<I, N, T>(tables: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let mut b = Self::new();
        for (name, text) in tables {
            b.insert(name, text);
        }
        b
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.tables.insert(name.into(), text.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table(&self, name: &str) -> Result<Table<'_>, LoadError> {
        let (key, text) = self
            .tables
            .get_key_value(name)
            .ok_or_else(|| LoadError::MissingTable(s!(name)))?;
        Table::parse(key, text)
    }

    /// Shorthand for `table(name)?.select(wanted)`.
    pub fn load(&self, name: &str, wanted: &str) -> Result<Selected<'_>, LoadError> {
        self.table(name)?.select(wanted)
    }
}

#[derive(Clone, Debug)]
pub struct Table<'a> {
    name: &'a str,
    header: Vec<&'a str>,
    /// Everything after the header line
    body: &'a str,
    /// 1-based file line of the first body line
    first_line: usize,
}

impl<'a> Table<'a> {
    pub fn parse(name: &'a str, text: &'a str) -> Result<Self, LoadError> {
        let mut offset = 0usize;
        let mut line_no = 0usize;

        for line in text.split_inclusive('\n') {
            line_no += 1;
            offset += line.len();
            let trimmed = trim_eol(line);
            if trimmed.trim().is_empty() { continue; }

            let header = trimmed.split('\t').map(str::trim).collect();
            return Ok(Self { name, header, body: &text[offset..], first_line: line_no + 1 });
        }

        Err(LoadError::EmptyTable(s!(name)))
    }

    pub fn name(&self) -> &'a str { self.name }

    pub fn headers(&self) -> &[&'a str] { &self.header }

    /// Header position of `column`, or the data-integrity error.
    pub fn column(&self, column: &str) -> Result<usize, LoadError> {
        self.header
            .iter()
            .position(|h| *h == column)
            .ok_or_else(|| LoadError::MissingColumn {
                table: s!(self.name),
                column: s!(column),
            })
    }

    /// Pick whitespace-separated `wanted` columns from every data row.
    /// All-or-nothing: any missing column or short row fails the whole call.
    pub fn select(&self, wanted: &str) -> Result<Selected<'a>, LoadError> {
        let positions: Vec<usize> = wanted
            .split_whitespace()
            .map(|c| self.column(c))
            .collect::<Result<_, _>>()?;
        let columns: Vec<&'a str> = positions.iter().map(|&p| self.header[p]).collect();
        let needed = positions.iter().copied().max().map(|m| m + 1).unwrap_or(0);

        let mut rows = Vec::new();
        let mut fields: Vec<&'a str> = Vec::with_capacity(self.header.len());

        for (i, line) in self.body.split('\n').enumerate() {
            let line = trim_eol(line);
            if line.trim().is_empty() { continue; }
            let line_no = self.first_line + i;

            fields.clear();
            fields.extend(line.split('\t'));
            if fields.len() < needed {
                return Err(LoadError::ShortRow { table: s!(self.name), line: line_no });
            }

            let cells = positions.iter().map(|&p| fields[p]).collect();
            rows.push(Row { line: line_no, cells });
        }

        Ok(Selected { table: self.name, columns, rows })
    }
}

fn trim_eol(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

#[derive(Clone, Debug)]
struct Row<'a> {
    line: usize,
    cells: Vec<&'a str>,
}

/// The requested columns of one table, one entry per data row.
#[derive(Clone, Debug)]
pub struct Selected<'a> {
    table: &'a str,
    columns: Vec<&'a str>,
    rows: Vec<Row<'a>>,
}

impl<'a> Selected<'a> {
    pub fn columns(&self) -> &[&'a str] { &self.columns }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn records(&self) -> impl Iterator<Item = Record<'_, 'a>> + '_ {
        self.rows.iter().map(move |row| Record { sel: self, row })
    }
}

/// One data row, cells in request order.
#[derive(Clone, Copy, Debug)]
pub struct Record<'s, 'a> {
    sel: &'s Selected<'a>,
    row: &'s Row<'a>,
}

impl<'s, 'a> Record<'s, 'a> {
    /// File line this row came from (1-based).
    pub fn line(&self) -> usize { self.row.line }

    pub fn text(&self, i: usize) -> &'a str {
        self.row.cells[i]
    }

    pub fn int(&self, i: usize) -> Result<i64, LoadError> {
        let raw = self.text(i);
        raw.trim().parse::<i64>().map_err(|_| self.bad_int(i, raw))
    }

    /// Non-negative integer that fits a rank.
    pub fn uint(&self, i: usize) -> Result<u32, LoadError> {
        let raw = self.text(i);
        raw.trim().parse::<u32>().map_err(|_| self.bad_int(i, raw))
    }

    fn bad_int(&self, i: usize, raw: &str) -> LoadError {
        LoadError::BadInt {
            table: s!(self.sel.table),
            column: s!(self.sel.columns[i]),
            line: self.row.line,
            value: s!(raw),
        }
    }
}
