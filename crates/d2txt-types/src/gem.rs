use serde::Serialize;

use crate::columns::{Columns, FromColumns, ModSlot, PropertyReference, read_slots, text};

pub const GEM_WEAPON_SLOTS: [ModSlot; 3] = [
    ModSlot::new("weaponMod1Code", "weaponMod1Param", "weaponMod1Min", "weaponMod1Max"),
    ModSlot::new("weaponMod2Code", "weaponMod2Param", "weaponMod2Min", "weaponMod2Max"),
    ModSlot::new("weaponMod3Code", "weaponMod3Param", "weaponMod3Min", "weaponMod3Max"),
];

pub const GEM_HELM_SLOTS: [ModSlot; 3] = [
    ModSlot::new("helmMod1Code", "helmMod1Param", "helmMod1Min", "helmMod1Max"),
    ModSlot::new("helmMod2Code", "helmMod2Param", "helmMod2Min", "helmMod2Max"),
    ModSlot::new("helmMod3Code", "helmMod3Param", "helmMod3Min", "helmMod3Max"),
];

pub const GEM_SHIELD_SLOTS: [ModSlot; 3] = [
    ModSlot::new("shieldMod1Code", "shieldMod1Param", "shieldMod1Min", "shieldMod1Max"),
    ModSlot::new("shieldMod2Code", "shieldMod2Param", "shieldMod2Min", "shieldMod2Max"),
    ModSlot::new("shieldMod3Code", "shieldMod3Param", "shieldMod3Min", "shieldMod3Max"),
];

/// A row of `Gems`: socket bonuses per host item class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gem {
    pub name: String,
    pub code: String,
    pub weapon: Vec<PropertyReference>,
    pub helm: Vec<PropertyReference>,
    pub shield: Vec<PropertyReference>,
}

impl FromColumns for Gem {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            name: text(row, "name"),
            code: text(row, "code"),
            weapon: read_slots(row, &GEM_WEAPON_SLOTS),
            helm: read_slots(row, &GEM_HELM_SLOTS),
            shield: read_slots(row, &GEM_SHIELD_SLOTS),
        }
    }
}
