use serde::Serialize;

use crate::columns::{Columns, FromColumns, ModSlot, PropertyReference, read_slots, text};

pub const AFFIX_SLOTS: [ModSlot; 3] = [
    ModSlot::new("mod1code", "mod1param", "mod1min", "mod1max"),
    ModSlot::new("mod2code", "mod2param", "mod2min", "mod2max"),
    ModSlot::new("mod3code", "mod3param", "mod3min", "mod3max"),
];

/// A row of `MagicPrefix` or `MagicSuffix`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagicAffix {
    /// String-table key of the affix text.
    pub name: String,
    pub level: String,
    pub properties: Vec<PropertyReference>,
}

impl FromColumns for MagicAffix {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            name: text(row, "Name"),
            level: text(row, "level"),
            properties: read_slots(row, &AFFIX_SLOTS),
        }
    }
}
