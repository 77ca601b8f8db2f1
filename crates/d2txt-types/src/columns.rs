//! Column access shared by every typed record.
//!
//! All tables are text: a column that is missing or blank reads as `""`, and
//! numbers are interpreted on demand with [`parse_number`].

use serde::Serialize;

/// Read access to one record by column name.
///
/// Implementations must return `""` for columns the record does not have.
pub trait Columns {
    fn column(&self, name: &str) -> &str;
}

/// Conversion from a raw record into a typed record.
pub trait FromColumns: Sized {
    fn from_columns(row: &dyn Columns) -> Self;
}

/// Numeric reading of a table cell: blank is `0`, anything unparseable is NaN.
pub fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Integer-coded cell (`dgrp`, `descfunc`, function codes). Blank or malformed is `None`.
pub fn parse_code(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok()
}

pub(crate) fn text(row: &dyn Columns, name: &str) -> String {
    row.column(name).trim().to_string()
}

/// One property slot of a record: stat code, parameter and value range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyReference {
    pub code: String,
    pub param: String,
    pub min: f64,
    pub max: f64,
}

impl PropertyReference {
    pub fn new(code: impl Into<String>, param: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            code: code.into(),
            param: param.into(),
            min,
            max,
        }
    }
}

/// Column names of one (code, param, min, max) quadruple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModSlot {
    pub code: &'static str,
    pub param: &'static str,
    pub min: &'static str,
    pub max: &'static str,
}

impl ModSlot {
    pub const fn new(
        code: &'static str,
        param: &'static str,
        min: &'static str,
        max: &'static str,
    ) -> Self {
        Self {
            code,
            param,
            min,
            max,
        }
    }

    /// Read this slot from `row`; a blank code means the slot is unused.
    pub fn read(&self, row: &dyn Columns) -> Option<PropertyReference> {
        let code = row.column(self.code).trim();
        if code.is_empty() {
            return None;
        }
        Some(PropertyReference {
            code: code.to_string(),
            param: text(row, self.param),
            min: parse_number(row.column(self.min)),
            max: parse_number(row.column(self.max)),
        })
    }
}

/// Read every used slot of `slots` from `row`, in slot order.
pub fn read_slots(row: &dyn Columns, slots: &[ModSlot]) -> Vec<PropertyReference> {
    slots.iter().filter_map(|slot| slot.read(row)).collect()
}
