use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr};

use crate::columns::{Columns, FromColumns, text};

/// Playable classes in `CharStats` order, excluding the `Expansion` divider row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    FromRepr,
)]
#[repr(u8)]
pub enum CharClass {
    #[strum(to_string = "ama")]
    Amazon = 0,
    #[strum(to_string = "sor")]
    Sorceress = 1,
    #[strum(to_string = "nec")]
    Necromancer = 2,
    #[strum(to_string = "pal")]
    Paladin = 3,
    #[strum(to_string = "bar")]
    Barbarian = 4,
    #[strum(to_string = "dru")]
    Druid = 5,
    #[strum(to_string = "ass")]
    Assassin = 6,
}

/// Name of the divider row between classic and expansion classes.
pub const EXPANSION_ROW: &str = "Expansion";

/// Number of skill tabs per class.
pub const SKILL_TABS: usize = 3;

/// A row of `CharStats`, restricted to the string keys descriptions need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharStats {
    pub class: String,
    pub str_all_skills: String,
    pub str_skill_tabs: [String; SKILL_TABS],
    pub str_class_only: String,
}

impl CharStats {
    pub fn is_divider(&self) -> bool {
        self.class == EXPANSION_ROW
    }
}

impl FromColumns for CharStats {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            class: text(row, "class"),
            str_all_skills: text(row, "StrAllSkills"),
            str_skill_tabs: [
                text(row, "StrSkillTab1"),
                text(row, "StrSkillTab2"),
                text(row, "StrSkillTab3"),
            ],
            str_class_only: text(row, "StrClassOnly"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(CharClass::COUNT, 7);
    }

    #[test]
    fn codes() {
        assert_eq!(CharClass::from_str("pal").ok(), Some(CharClass::Paladin));
        assert_eq!(CharClass::Assassin.to_string(), "ass");
        assert!(CharClass::from_str("xyz").is_err());
    }

    #[test]
    fn round_trip() {
        for c in CharClass::iter() {
            assert_eq!(CharClass::from_repr(c as u8), Some(c));
        }
    }
}
