use serde::Serialize;

use crate::columns::{Columns, FromColumns, ModSlot, PropertyReference, read_slots, text};

/// Own property slots of a set item.
pub const SET_ITEM_SLOTS: [ModSlot; 9] = [
    ModSlot::new("prop1", "par1", "min1", "max1"),
    ModSlot::new("prop2", "par2", "min2", "max2"),
    ModSlot::new("prop3", "par3", "min3", "max3"),
    ModSlot::new("prop4", "par4", "min4", "max4"),
    ModSlot::new("prop5", "par5", "min5", "max5"),
    ModSlot::new("prop6", "par6", "min6", "max6"),
    ModSlot::new("prop7", "par7", "min7", "max7"),
    ModSlot::new("prop8", "par8", "min8", "max8"),
    ModSlot::new("prop9", "par9", "min9", "max9"),
];

/// Bonus slot pairs of a set item; pair `n` (0-based) applies with `n + 2` items worn.
pub const SET_ITEM_BONUS_SLOTS: [[ModSlot; 2]; 5] = [
    [
        ModSlot::new("aprop1a", "apar1a", "amin1a", "amax1a"),
        ModSlot::new("aprop1b", "apar1b", "amin1b", "amax1b"),
    ],
    [
        ModSlot::new("aprop2a", "apar2a", "amin2a", "amax2a"),
        ModSlot::new("aprop2b", "apar2b", "amin2b", "amax2b"),
    ],
    [
        ModSlot::new("aprop3a", "apar3a", "amin3a", "amax3a"),
        ModSlot::new("aprop3b", "apar3b", "amin3b", "amax3b"),
    ],
    [
        ModSlot::new("aprop4a", "apar4a", "amin4a", "amax4a"),
        ModSlot::new("aprop4b", "apar4b", "amin4b", "amax4b"),
    ],
    [
        ModSlot::new("aprop5a", "apar5a", "amin5a", "amax5a"),
        ModSlot::new("aprop5b", "apar5b", "amin5b", "amax5b"),
    ],
];

/// Partial bonus slots of a set; pair `n` (0-based) applies with `n + 2` items worn.
pub const SET_PARTIAL_SLOTS: [[ModSlot; 2]; 4] = [
    [
        ModSlot::new("PCode2a", "PParam2a", "PMin2a", "PMax2a"),
        ModSlot::new("PCode2b", "PParam2b", "PMin2b", "PMax2b"),
    ],
    [
        ModSlot::new("PCode3a", "PParam3a", "PMin3a", "PMax3a"),
        ModSlot::new("PCode3b", "PParam3b", "PMin3b", "PMax3b"),
    ],
    [
        ModSlot::new("PCode4a", "PParam4a", "PMin4a", "PMax4a"),
        ModSlot::new("PCode4b", "PParam4b", "PMin4b", "PMax4b"),
    ],
    [
        ModSlot::new("PCode5a", "PParam5a", "PMin5a", "PMax5a"),
        ModSlot::new("PCode5b", "PParam5b", "PMin5b", "PMax5b"),
    ],
];

/// Full-set bonus slots.
pub const SET_FULL_SLOTS: [ModSlot; 8] = [
    ModSlot::new("FCode1", "FParam1", "FMin1", "FMax1"),
    ModSlot::new("FCode2", "FParam2", "FMin2", "FMax2"),
    ModSlot::new("FCode3", "FParam3", "FMin3", "FMax3"),
    ModSlot::new("FCode4", "FParam4", "FMin4", "FMax4"),
    ModSlot::new("FCode5", "FParam5", "FMin5", "FMax5"),
    ModSlot::new("FCode6", "FParam6", "FMin6", "FMax6"),
    ModSlot::new("FCode7", "FParam7", "FMin7", "FMax7"),
    ModSlot::new("FCode8", "FParam8", "FMin8", "FMax8"),
];

/// A row of `SetItems`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetItem {
    pub index: String,
    pub set: String,
    pub item: String,
    pub level_req: String,
    pub properties: Vec<PropertyReference>,
    /// `(items worn, properties)` for each non-empty bonus pair.
    pub bonuses: Vec<(usize, Vec<PropertyReference>)>,
}

impl FromColumns for SetItem {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            index: text(row, "index"),
            set: text(row, "set"),
            item: text(row, "item"),
            level_req: text(row, "lvl req"),
            properties: read_slots(row, &SET_ITEM_SLOTS),
            bonuses: read_bonus_pairs(row, &SET_ITEM_BONUS_SLOTS),
        }
    }
}

/// A row of `Sets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSet {
    pub index: String,
    pub name: String,
    pub partial: Vec<(usize, Vec<PropertyReference>)>,
    pub full: Vec<PropertyReference>,
}

impl FromColumns for ItemSet {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            index: text(row, "index"),
            name: text(row, "name"),
            partial: read_bonus_pairs(row, &SET_PARTIAL_SLOTS),
            full: read_slots(row, &SET_FULL_SLOTS),
        }
    }
}

fn read_bonus_pairs(
    row: &dyn Columns,
    pairs: &[[ModSlot; 2]],
) -> Vec<(usize, Vec<PropertyReference>)> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| (i + 2, read_slots(row, pair)))
        .filter(|(_, refs)| !refs.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::testing::MapRow;

    #[test]
    fn bonus_pairs_count_items_from_two() {
        let row = MapRow::new(&[
            ("index", "Civerb's Ward"),
            ("set", "Civerb's Vestments"),
            ("prop1", "ac"),
            ("min1", "15"),
            ("max1", "15"),
            ("aprop2a", "res-pois"),
            ("amin2a", "25"),
            ("amax2a", "25"),
        ]);
        let item = SetItem::from_columns(&row);
        assert_eq!(item.properties.len(), 1);
        assert_eq!(item.bonuses.len(), 1);
        assert_eq!(item.bonuses[0].0, 3);
        assert_eq!(item.bonuses[0].1[0].code, "res-pois");
    }

    #[test]
    fn set_partial_and_full() {
        let row = MapRow::new(&[
            ("index", "Civerb's Vestments"),
            ("PCode2a", "str"),
            ("PMin2a", "15"),
            ("PMax2a", "15"),
            ("FCode1", "res-all"),
            ("FMin1", "10"),
            ("FMax1", "10"),
        ]);
        let set = ItemSet::from_columns(&row);
        assert_eq!(set.partial.len(), 1);
        assert_eq!(set.partial[0].0, 2);
        assert_eq!(set.full[0].code, "res-all");
    }
}
