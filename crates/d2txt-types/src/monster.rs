use serde::Serialize;

use crate::columns::{Columns, FromColumns, text};

/// A row of `MonStats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonStat {
    pub id: String,
    pub hc_idx: String,
    /// String-table key of the monster's display name.
    pub name_str: String,
}

impl FromColumns for MonStat {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            id: text(row, "Id"),
            hc_idx: text(row, "hcIdx"),
            name_str: text(row, "NameStr"),
        }
    }
}

/// A row of `MonType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonType {
    pub kind: String,
    /// String-table key of the plural name ("Undead", "Demons").
    pub str_plural: String,
}

impl FromColumns for MonType {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            kind: text(row, "type"),
            str_plural: text(row, "strplur"),
        }
    }
}
