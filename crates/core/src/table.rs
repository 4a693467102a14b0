// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delimited table files.
//!
//! Tracker exports arrive as header-plus-rows text files with a
//! configurable single-character delimiter (`^` and tab are the observed
//! variants). Fields may be double-quoted, with `""` escaping an embedded
//! quote, so values containing the delimiter or newlines survive a round
//! trip. Lookup is by column name; a column absent from the header reads as
//! the empty string rather than failing.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// An in-memory delimited table: one header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse delimited text. The first record is the header; empty input
    /// yields a table with no columns and no rows.
    pub fn parse(text: &str, delimiter: char) -> Table {
        let mut records = parse_records(text, delimiter);
        if records.is_empty() {
            return Table::default();
        }
        let columns = records.remove(0);
        Table {
            columns,
            rows: records,
        }
    }

    /// Read a delimited file. A file without a header row is an error.
    pub fn read(path: &Path, delimiter: char) -> Result<Table> {
        let text = fs::read_to_string(path)?;
        let table = Table::parse(&text, delimiter);
        if table.columns.is_empty() {
            return Err(Error::EmptyTable(path.display().to_string()));
        }
        Ok(table)
    }

    /// Header column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Data rows, in file order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// One data row, resolving fields by header name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Field value under `column`; `""` when the column is missing from the
    /// header or the row is short.
    pub fn field(&self, column: &str) -> &'a str {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Streaming writer for delimited records with minimal quoting.
pub struct TableWriter<W: Write> {
    inner: W,
    delimiter: char,
}

impl<W: Write> TableWriter<W> {
    pub fn new(inner: W, delimiter: char) -> Self {
        TableWriter { inner, delimiter }
    }

    /// Write one record. Fields containing the delimiter, a quote, or a
    /// newline are double-quoted with `""` escaping.
    pub fn record<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<()> {
        let mut first = true;
        for cell in cells {
            if !first {
                write!(self.inner, "{}", self.delimiter)?;
            }
            first = false;
            write_field(&mut self.inner, cell.as_ref(), self.delimiter)?;
        }
        writeln!(self.inner)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

fn write_field<W: Write>(w: &mut W, field: &str, delimiter: char) -> Result<()> {
    let needs_quoting = field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r');
    if needs_quoting {
        write!(w, "\"{}\"", field.replace('"', "\"\""))?;
    } else {
        write!(w, "{}", field)?;
    }
    Ok(())
}

/// Split text into records of fields, honoring quoted fields.
fn parse_records(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // True once the current record has any content; a trailing newline at
    // end of input must not produce a phantom empty record.
    let mut record_started = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                record_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
                record_started = false;
            }
            c if c == delimiter => {
                record.push(std::mem::take(&mut field));
                record_started = true;
            }
            c => {
                field.push(c);
                record_started = true;
            }
        }
    }
    if record_started || !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
