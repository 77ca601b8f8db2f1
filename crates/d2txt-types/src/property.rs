use serde::Serialize;

use crate::columns::{Columns, FromColumns, text};

/// Number of (func, stat, val) triples a property row can hold.
pub const PROPERTY_SLOTS: usize = 7;

const FUNC_COLUMNS: [&str; PROPERTY_SLOTS] =
    ["func1", "func2", "func3", "func4", "func5", "func6", "func7"];
const STAT_COLUMNS: [&str; PROPERTY_SLOTS] =
    ["stat1", "stat2", "stat3", "stat4", "stat5", "stat6", "stat7"];
const VAL_COLUMNS: [&str; PROPERTY_SLOTS] = ["val1", "val2", "val3", "val4", "val5", "val6", "val7"];

/// One raw (func, stat, val) triple; interpretation happens during expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertySlot {
    pub func: String,
    pub stat: String,
    pub val: String,
}

/// A row of `Properties`: maps a modifier code to the stats it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDef {
    pub code: String,
    pub slots: [PropertySlot; PROPERTY_SLOTS],
}

impl FromColumns for PropertyDef {
    fn from_columns(row: &dyn Columns) -> Self {
        let slots = std::array::from_fn(|i| PropertySlot {
            func: text(row, FUNC_COLUMNS[i]),
            stat: text(row, STAT_COLUMNS[i]),
            val: text(row, VAL_COLUMNS[i]),
        });
        Self {
            code: text(row, "code"),
            slots,
        }
    }
}
