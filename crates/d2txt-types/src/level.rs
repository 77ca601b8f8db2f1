use serde::Serialize;

use crate::columns::{Columns, FromColumns, text};

/// A row of `Levels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelDef {
    pub name: String,
    pub id: String,
    /// String-table key of the in-game area name.
    pub level_name: String,
}

impl FromColumns for LevelDef {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            name: text(row, "Name"),
            id: text(row, "Id"),
            level_name: text(row, "LevelName"),
        }
    }
}
