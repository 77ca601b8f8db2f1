//! The in-memory dataset: every loaded table plus typed views over the ones
//! descriptions are built from.

use std::collections::HashMap;
use std::path::Path;

use d2txt_types::{
    BaseItem, CharStats, CubeRecipe, FromColumns, Gem, ItemKind, ItemSet, ItemStat, ItemType,
    LevelDef, MagicAffix, MonStat, MonType, PropertyDef, Runeword, SetItem, Skill, SkillDesc,
    UniqueItem, parse_number,
};
use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::table::Table;
use crate::{DataError, read_table};

/// Highest character level when `Experience` does not say otherwise.
pub const DEFAULT_MAX_LEVEL: f64 = 99.0;

/// Tables the dataset knows how to type. The variant name is the file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display, AsRefStr)]
pub enum TableName {
    ItemStatCost,
    Properties,
    ItemTypes,
    Weapons,
    Armor,
    Misc,
    UniqueItems,
    SetItems,
    Sets,
    Runes,
    MagicPrefix,
    MagicSuffix,
    Gems,
    CubeMain,
    Skills,
    SkillDesc,
    MonStats,
    MonType,
    CharStats,
    Levels,
    Experience,
}

/// Loaded tables and their typed records. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    tables: HashMap<String, Table>,

    pub stats: Vec<ItemStat>,
    pub properties: Vec<PropertyDef>,
    pub item_types: Vec<ItemType>,
    /// Weapons, then armor, then misc.
    pub items: Vec<BaseItem>,
    pub uniques: Vec<UniqueItem>,
    pub set_items: Vec<SetItem>,
    pub sets: Vec<ItemSet>,
    pub runewords: Vec<Runeword>,
    pub prefixes: Vec<MagicAffix>,
    pub suffixes: Vec<MagicAffix>,
    pub gems: Vec<Gem>,
    pub recipes: Vec<CubeRecipe>,
    pub skills: Vec<Skill>,
    pub skill_descs: Vec<SkillDesc>,
    pub monsters: Vec<MonStat>,
    pub monster_types: Vec<MonType>,
    pub char_stats: Vec<CharStats>,
    pub levels: Vec<LevelDef>,

    stat_index: HashMap<String, usize>,
    property_index: HashMap<String, usize>,
    item_type_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
    unique_index: HashMap<String, usize>,
    set_item_index: HashMap<String, usize>,
    skill_desc_index: HashMap<String, usize>,
    max_level: f64,
}

fn typed<T: FromColumns>(tables: &HashMap<String, Table>, name: TableName) -> Vec<T> {
    tables
        .get(name.as_ref())
        .map(|t| t.rows().map(|row| T::from_columns(&row)).collect())
        .unwrap_or_default()
}

/// Lowercased key -> first position; blank keys are not indexed.
fn index_by<T>(records: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let k = key(record);
        if !k.is_empty() {
            index.entry(k.to_ascii_lowercase()).or_insert(i);
        }
    }
    index
}

fn read_max_level(tables: &HashMap<String, Table>) -> f64 {
    tables
        .get(TableName::Experience.as_ref())
        .and_then(|t| t.rows().find(|row| row.get("Level") == "MaxLvl"))
        .map(|row| parse_number(row.get("Amazon")))
        .filter(|lvl| lvl.is_finite() && *lvl > 0.0)
        .unwrap_or(DEFAULT_MAX_LEVEL)
}

impl Dataset {
    /// Build the typed views from tables keyed by name. Missing tables yield empty views.
    pub fn from_tables(tables: HashMap<String, Table>) -> Self {
        let stats: Vec<ItemStat> = typed(&tables, TableName::ItemStatCost);
        let properties: Vec<PropertyDef> = typed(&tables, TableName::Properties);
        let item_types: Vec<ItemType> = typed(&tables, TableName::ItemTypes);

        let mut items = Vec::new();
        for (kind, name) in [
            (ItemKind::Weapon, TableName::Weapons),
            (ItemKind::Armor, TableName::Armor),
            (ItemKind::Misc, TableName::Misc),
        ] {
            if let Some(table) = tables.get(name.as_ref()) {
                items.extend(table.rows().map(|row| BaseItem::from_columns(kind, &row)));
            }
        }

        let uniques: Vec<UniqueItem> = typed(&tables, TableName::UniqueItems);
        let set_items: Vec<SetItem> = typed(&tables, TableName::SetItems);
        let skill_descs: Vec<SkillDesc> = typed(&tables, TableName::SkillDesc);

        Self {
            stat_index: index_by(&stats, |s| s.name.as_str()),
            property_index: index_by(&properties, |p| p.code.as_str()),
            item_type_index: index_by(&item_types, |t| t.code.as_str()),
            item_index: index_by(&items, |i| i.code.as_str()),
            unique_index: index_by(&uniques, |u| u.index.as_str()),
            set_item_index: index_by(&set_items, |s| s.index.as_str()),
            skill_desc_index: index_by(&skill_descs, |s| s.key.as_str()),
            max_level: read_max_level(&tables),
            stats,
            properties,
            item_types,
            items,
            uniques,
            set_items,
            sets: typed(&tables, TableName::Sets),
            runewords: typed(&tables, TableName::Runes),
            prefixes: typed(&tables, TableName::MagicPrefix),
            suffixes: typed(&tables, TableName::MagicSuffix),
            gems: typed(&tables, TableName::Gems),
            recipes: typed(&tables, TableName::CubeMain),
            skills: typed(&tables, TableName::Skills),
            skill_descs,
            monsters: typed(&tables, TableName::MonStats),
            monster_types: typed(&tables, TableName::MonType),
            char_stats: typed(&tables, TableName::CharStats),
            levels: typed(&tables, TableName::Levels),
            tables,
        }
    }

    /// Read `<dir>/<TableName>.txt` for every known table.
    pub fn load_dir(dir: &Path) -> Result<Self, DataError> {
        let mut tables = HashMap::new();
        for name in TableName::iter() {
            let path = dir.join(format!("{name}.txt"));
            if !path.is_file() {
                log::warn!("{}: not found, {name} will be empty", path.display());
                continue;
            }
            let table = read_table(&path)?;
            log::debug!("{name}: {} records", table.len());
            tables.insert(name.to_string(), table);
        }
        Ok(Self::from_tables(tables))
    }

    /// Raw access to any loaded table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn max_level(&self) -> f64 {
        self.max_level
    }

    pub fn stat(&self, name: &str) -> Option<&ItemStat> {
        self.stat_index
            .get(&name.to_ascii_lowercase())
            .map(|&i| &self.stats[i])
    }

    /// Every stat definition sharing display group `group`.
    pub fn stats_in_group(&self, group: i32) -> impl Iterator<Item = &ItemStat> {
        self.stats.iter().filter(move |s| s.group == Some(group))
    }

    pub fn property(&self, code: &str) -> Option<&PropertyDef> {
        self.property_index
            .get(&code.to_ascii_lowercase())
            .map(|&i| &self.properties[i])
    }

    pub fn item_type(&self, code: &str) -> Option<&ItemType> {
        self.item_type_index
            .get(&code.to_ascii_lowercase())
            .map(|&i| &self.item_types[i])
    }

    pub fn item(&self, code: &str) -> Option<&BaseItem> {
        self.item_index
            .get(&code.to_ascii_lowercase())
            .map(|&i| &self.items[i])
    }

    pub fn unique(&self, index: &str) -> Option<&UniqueItem> {
        self.unique_index
            .get(&index.to_ascii_lowercase())
            .map(|&i| &self.uniques[i])
    }

    pub fn set_item(&self, index: &str) -> Option<&SetItem> {
        self.set_item_index
            .get(&index.to_ascii_lowercase())
            .map(|&i| &self.set_items[i])
    }

    pub fn skill_desc(&self, key: &str) -> Option<&SkillDesc> {
        self.skill_desc_index
            .get(&key.to_ascii_lowercase())
            .map(|&i| &self.skill_descs[i])
    }

    pub fn level(&self, id: &str) -> Option<&LevelDef> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn monster_type(&self, kind: &str) -> Option<&MonType> {
        self.monster_types
            .iter()
            .find(|t| t.kind.eq_ignore_ascii_case(kind))
    }

    /// Cube recipes with `enabled == "1"`, in table order.
    pub fn enabled_recipes(&self) -> impl Iterator<Item = &CubeRecipe> {
        self.recipes.iter().filter(|r| r.is_enabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(pairs: &[(TableName, &str)]) -> Dataset {
        let tables = pairs
            .iter()
            .map(|(name, text)| (name.to_string(), Table::parse(text).expect("parse table")))
            .collect();
        Dataset::from_tables(tables)
    }

    #[test]
    fn missing_tables_are_empty() {
        let data = Dataset::from_tables(HashMap::new());
        assert!(data.stats.is_empty());
        assert!(data.table("ItemStatCost").is_none());
        assert_eq!(data.max_level(), DEFAULT_MAX_LEVEL);
    }

    #[test]
    fn items_from_all_three_tables() {
        let data = dataset(&[
            (TableName::Weapons, "name\tcode\ttype\nCrystal Sword\tcrs\tswor\n"),
            (TableName::Armor, "name\tcode\ttype\nWar Hat\tuap\thelm\n"),
            (TableName::Misc, "name\tcode\ttype\nRing\trin\tring\n"),
        ]);
        assert_eq!(data.items.len(), 3);
        assert_eq!(data.item("UAP").map(|i| i.kind), Some(ItemKind::Armor));
        assert_eq!(data.item("rin").map(|i| i.kind), Some(ItemKind::Misc));
    }

    #[test]
    fn first_duplicate_code_is_indexed() {
        let data = dataset(&[(
            TableName::ItemStatCost,
            "Stat\tID\nstrength\t0\nstrength\t99\n",
        )]);
        assert_eq!(data.stat("Strength").map(|s| s.id.as_str()), Some("0"));
    }

    #[test]
    fn max_level_from_experience() {
        let data = dataset(&[(
            TableName::Experience,
            "Level\tAmazon\tSorceress\nMaxLvl\t80\t80\n0\t0\t0\n",
        )]);
        assert_eq!(data.max_level(), 80.0);
    }

    #[test]
    fn enabled_recipes_only() {
        let data = dataset(&[(
            TableName::CubeMain,
            "description\tenabled\toutput\na\t1\tgfv\nb\t0\tgfv\nc\t\tgfv\n",
        )]);
        let enabled: Vec<_> = data.enabled_recipes().map(|r| r.description.as_str()).collect();
        assert_eq!(enabled, vec!["a"]);
    }

    #[test]
    fn stats_in_group() {
        let data = dataset(&[(
            TableName::ItemStatCost,
            "Stat\tdgrp\nfireresist\t2\ncoldresist\t2\nstrength\t1\n",
        )]);
        assert_eq!(data.stats_in_group(2).count(), 2);
        assert_eq!(data.stats_in_group(9).count(), 0);
    }
}
