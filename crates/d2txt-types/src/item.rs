use serde::Serialize;
use strum::{AsRefStr, Display, EnumCount, EnumIter};

use crate::columns::{Columns, FromColumns, text};

/// Which of the three base item tables a record came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, Display, AsRefStr,
)]
pub enum ItemKind {
    Weapon,
    Armor,
    Misc,
}

/// A row of `Weapons`, `Armor` or `Misc`; the three share these columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseItem {
    pub kind: ItemKind,
    pub name: String,
    pub code: String,
    pub type1: String,
    pub type2: String,
    /// String-table key of the display name.
    pub name_str: String,
}

impl BaseItem {
    pub fn from_columns(kind: ItemKind, row: &dyn Columns) -> Self {
        Self {
            kind,
            name: text(row, "name"),
            code: text(row, "code"),
            type1: text(row, "type"),
            type2: text(row, "type2"),
            name_str: text(row, "namestr"),
        }
    }

    /// Both type codes, skipping blanks.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        [self.type1.as_str(), self.type2.as_str()]
            .into_iter()
            .filter(|t| !t.is_empty())
    }
}

/// A row of `ItemTypes`: a type code and up to two parent types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemType {
    pub name: String,
    pub code: String,
    pub equiv1: String,
    pub equiv2: String,
}

impl ItemType {
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        [self.equiv1.as_str(), self.equiv2.as_str()]
            .into_iter()
            .filter(|t| !t.is_empty())
    }
}

impl FromColumns for ItemType {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            name: text(row, "ItemType"),
            code: text(row, "Code"),
            equiv1: text(row, "Equiv1"),
            equiv2: text(row, "Equiv2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::testing::MapRow;

    #[test]
    fn blank_types_are_skipped() {
        let row = MapRow::new(&[("name", "Ring"), ("code", "rin"), ("type", "ring")]);
        let item = BaseItem::from_columns(ItemKind::Misc, &row);
        assert_eq!(item.types().collect::<Vec<_>>(), vec!["ring"]);
        assert_eq!(item.kind.as_ref(), "Misc");
    }

    #[test]
    fn item_type_parents() {
        let row = MapRow::new(&[("Code", "swor"), ("Equiv1", "mele"), ("Equiv2", "")]);
        let ty = ItemType::from_columns(&row);
        assert_eq!(ty.parents().collect::<Vec<_>>(), vec!["mele"]);
    }
}
