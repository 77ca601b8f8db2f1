use serde::Serialize;

use crate::columns::{Columns, FromColumns, ModSlot, PropertyReference, read_slots, text};

pub const RUNEWORD_SLOTS: [ModSlot; 7] = [
    ModSlot::new("T1Code1", "T1Param1", "T1Min1", "T1Max1"),
    ModSlot::new("T1Code2", "T1Param2", "T1Min2", "T1Max2"),
    ModSlot::new("T1Code3", "T1Param3", "T1Min3", "T1Max3"),
    ModSlot::new("T1Code4", "T1Param4", "T1Min4", "T1Max4"),
    ModSlot::new("T1Code5", "T1Param5", "T1Min5", "T1Max5"),
    ModSlot::new("T1Code6", "T1Param6", "T1Min6", "T1Max6"),
    ModSlot::new("T1Code7", "T1Param7", "T1Min7", "T1Max7"),
];

const RUNE_COLUMNS: [&str; 6] = ["Rune1", "Rune2", "Rune3", "Rune4", "Rune5", "Rune6"];

/// A row of `Runes` (runeword definitions).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Runeword {
    pub name: String,
    /// String-table key of the runeword's display name.
    pub rune_name: String,
    pub complete: String,
    /// Base item codes of the runes, in socketing order.
    pub runes: Vec<String>,
    pub properties: Vec<PropertyReference>,
}

impl Runeword {
    pub fn is_complete(&self) -> bool {
        self.complete == "1"
    }
}

impl FromColumns for Runeword {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            name: text(row, "Name"),
            rune_name: text(row, "*Rune Name"),
            complete: text(row, "complete"),
            runes: RUNE_COLUMNS
                .iter()
                .map(|c| text(row, c))
                .filter(|r| !r.is_empty())
                .collect(),
            properties: read_slots(row, &RUNEWORD_SLOTS),
        }
    }
}
