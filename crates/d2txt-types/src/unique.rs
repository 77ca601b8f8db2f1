use serde::Serialize;

use crate::columns::{Columns, FromColumns, ModSlot, PropertyReference, read_slots, text};

/// Property slots of a unique item.
pub const UNIQUE_SLOTS: [ModSlot; 12] = [
    ModSlot::new("prop1", "par1", "min1", "max1"),
    ModSlot::new("prop2", "par2", "min2", "max2"),
    ModSlot::new("prop3", "par3", "min3", "max3"),
    ModSlot::new("prop4", "par4", "min4", "max4"),
    ModSlot::new("prop5", "par5", "min5", "max5"),
    ModSlot::new("prop6", "par6", "min6", "max6"),
    ModSlot::new("prop7", "par7", "min7", "max7"),
    ModSlot::new("prop8", "par8", "min8", "max8"),
    ModSlot::new("prop9", "par9", "min9", "max9"),
    ModSlot::new("prop10", "par10", "min10", "max10"),
    ModSlot::new("prop11", "par11", "min11", "max11"),
    ModSlot::new("prop12", "par12", "min12", "max12"),
];

/// A row of `UniqueItems`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueItem {
    /// Also the string-table key of the item's name.
    pub index: String,
    pub code: String,
    pub enabled: String,
    pub level: String,
    pub level_req: String,
    pub properties: Vec<PropertyReference>,
}

impl UniqueItem {
    pub fn is_enabled(&self) -> bool {
        self.enabled == "1"
    }
}

impl FromColumns for UniqueItem {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            index: text(row, "index"),
            code: text(row, "code"),
            enabled: text(row, "enabled"),
            level: text(row, "lvl"),
            level_req: text(row, "lvl req"),
            properties: read_slots(row, &UNIQUE_SLOTS),
        }
    }
}
