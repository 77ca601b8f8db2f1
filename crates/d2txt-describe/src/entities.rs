//! Description helpers for whole records: uniques, set items, sets,
//! runewords, magic affixes and gems.

use d2txt_types::{Gem, ItemSet, MagicAffix, PropertyReference, Runeword, SetItem, UniqueItem};
use serde::Serialize;

use crate::Context;
use crate::lookup::placeholder;

/// Lines granted with a number of set items worn.
pub type CountedLines = Vec<(usize, Vec<String>)>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetItemDescription {
    pub properties: Vec<String>,
    pub bonuses: CountedLines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetDescription {
    pub partial: CountedLines,
    pub full: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunewordDescription {
    pub name: String,
    pub runes: Vec<String>,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GemDescription {
    pub weapon: Vec<String>,
    pub helm: Vec<String>,
    pub shield: Vec<String>,
}

impl Context<'_> {
    fn describe_counted(&self, groups: &[(usize, Vec<PropertyReference>)]) -> CountedLines {
        groups
            .iter()
            .map(|(count, refs)| (*count, self.describe(refs)))
            .filter(|(_, lines)| !lines.is_empty())
            .collect()
    }

    pub fn describe_unique(&self, unique: &UniqueItem) -> Vec<String> {
        self.describe(&unique.properties)
    }

    pub fn describe_set_item(&self, item: &SetItem) -> SetItemDescription {
        SetItemDescription {
            properties: self.describe(&item.properties),
            bonuses: self.describe_counted(&item.bonuses),
        }
    }

    pub fn describe_set(&self, set: &ItemSet) -> SetDescription {
        SetDescription {
            partial: self.describe_counted(&set.partial),
            full: self.describe(&set.full),
        }
    }

    /// Rune names resolve through the base item table; unknown codes stay visible.
    /// A name key missing from the string tables falls back to `*Rune Name`.
    pub fn describe_runeword(&self, runeword: &Runeword) -> RunewordDescription {
        let name = if !self.strings.contains(&runeword.name) && !runeword.rune_name.is_empty() {
            runeword.rune_name.clone()
        } else {
            self.strings.get(&runeword.name)
        };
        RunewordDescription {
            name,
            runes: runeword
                .runes
                .iter()
                .map(|code| self.item_name(code).unwrap_or_else(|| placeholder(code)))
                .collect(),
            properties: self.describe(&runeword.properties),
        }
    }

    pub fn describe_affix(&self, affix: &MagicAffix) -> Vec<String> {
        self.describe(&affix.properties)
    }

    pub fn describe_gem(&self, gem: &Gem) -> GemDescription {
        GemDescription {
            weapon: self.describe(&gem.weapon),
            helm: self.describe(&gem.helm),
            shield: self.describe(&gem.shield),
        }
    }
}
