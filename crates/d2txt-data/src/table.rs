//! Parser for tab-delimited Excel text tables.
//!
//! The first non-empty line holds the column names; every following
//! non-empty line is one record. Column lookup is case-insensitive and a
//! column a record does not reach reads as `""`.

use std::collections::HashMap;

use d2txt_types::Columns;
use winnow::combinator::separated;
use winnow::token::take_till;
use winnow::{ModalResult, Parser};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("table has no header line")]
    MissingHeader,
}

/// One loaded table: column names plus ordered records.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

fn field<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_till(0.., '\t').parse_next(input)
}

fn fields<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    separated(1.., field, '\t').parse_next(input)
}

fn split_line(line: &str, line_num: usize) -> Result<Vec<&str>, TableError> {
    fields.parse(line).map_err(|e| TableError::Parse {
        line: line_num + 1,
        msg: e.to_string(),
    })
}

impl Table {
    /// Parse the full text of a table file.
    pub fn parse(input: &str) -> Result<Self, TableError> {
        let mut lines = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (header_num, header) = lines.next().ok_or(TableError::MissingHeader)?;
        let headers: Vec<String> = split_line(header, header_num)?
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut index = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            index.entry(name.to_ascii_lowercase()).or_insert(i);
        }

        let mut rows = Vec::new();
        for (line_num, line) in lines {
            let row = split_line(line, line_num)?
                .into_iter()
                .map(str::to_string)
                .collect();
            rows.push(row);
        }

        Ok(Self {
            headers,
            index,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, i: usize) -> Option<Row<'_>> {
        self.rows.get(i).map(|fields| Row {
            table: self,
            fields,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |fields| Row {
            table: self,
            fields,
        })
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_ascii_lowercase()).copied()
    }
}

/// A borrowed record of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    fields: &'a [String],
}

impl<'a> Row<'a> {
    /// The cell under column `name`, or `""` when absent.
    pub fn get(&self, name: &str) -> &'a str {
        self.table
            .column_index(name)
            .and_then(|i| self.fields.get(i))
            .map_or("", String::as_str)
    }
}

impl Columns for Row<'_> {
    fn column(&self, name: &str) -> &str {
        self.get(name)
    }
}
