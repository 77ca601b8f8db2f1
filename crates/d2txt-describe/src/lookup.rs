//! Cross-table lookups. None of them fail: an unresolved reference renders
//! as `<reference>`.

use std::collections::HashSet;
use std::str::FromStr;

use d2txt_data::Dataset;
use d2txt_types::{BaseItem, CharClass, CharStats, Skill};
use strum::EnumCount;

use crate::Context;

/// Deepest equivalence chain followed before giving up.
const MAX_TYPE_DEPTH: usize = 16;

pub fn placeholder(reference: &str) -> String {
    format!("<{reference}>")
}

fn type_reaches(data: &Dataset, code: &str, target: &str, seen: &mut HashSet<String>) -> bool {
    if code.eq_ignore_ascii_case(target) {
        return true;
    }
    if seen.len() >= MAX_TYPE_DEPTH || !seen.insert(code.to_ascii_lowercase()) {
        return false;
    }
    data.item_type(code)
        .is_some_and(|ty| ty.parents().any(|parent| type_reaches(data, parent, target, seen)))
}

/// Whether the type code `code` is `target` or reaches it through `Equiv` parents.
///
/// Cycles in the type table end the walk without a match.
pub fn type_is_of_type(data: &Dataset, code: &str, target: &str) -> bool {
    type_reaches(data, code, target, &mut HashSet::new())
}

/// Whether either of `item`'s type codes is, or descends from, `target`.
pub fn item_type_is_of_type(data: &Dataset, item: &BaseItem, target: &str) -> bool {
    item.types().any(|code| type_is_of_type(data, code, target))
}

/// Base items matching any of `include` and none of `exclude`, in table order.
pub fn items_matching_types<'a>(
    data: &'a Dataset,
    include: &[&str],
    exclude: &[&str],
) -> Vec<&'a BaseItem> {
    data.items
        .iter()
        .filter(|item| include.iter().any(|t| item_type_is_of_type(data, item, t)))
        .filter(|item| !exclude.iter().any(|t| item_type_is_of_type(data, item, t)))
        .collect()
}

impl Context<'_> {
    /// A skill by id (the row number when the table has no id column) or by name.
    pub fn skill(&self, id_or_name: &str) -> Option<&Skill> {
        let key = id_or_name.trim();
        if key.is_empty() {
            return None;
        }
        let skills = &self.data.skills;
        skills
            .iter()
            .find(|s| !s.id.is_empty() && s.id == key)
            .or_else(|| {
                key.parse::<usize>()
                    .ok()
                    .filter(|_| skills.iter().all(|s| s.id.is_empty()))
                    .and_then(|i| skills.get(i))
            })
            .or_else(|| skills.iter().find(|s| s.name.eq_ignore_ascii_case(key)))
    }

    pub fn skill_name(&self, id_or_name: &str) -> String {
        let Some(skill) = self.skill(id_or_name) else {
            return placeholder(id_or_name);
        };
        match self.data.skill_desc(&skill.skill_desc) {
            Some(desc) if !desc.name_str.is_empty() => self.strings.get(&desc.name_str),
            _ => skill.name.clone(),
        }
    }

    /// The `CharStats` row of class `index`, skipping the expansion divider.
    pub fn class_row(&self, index: usize) -> Option<&CharStats> {
        if index >= CharClass::COUNT {
            return None;
        }
        self.data
            .char_stats
            .iter()
            .filter(|row| !row.is_divider())
            .take(CharClass::COUNT)
            .nth(index)
    }

    fn class_row_for(&self, param: &str) -> Option<&CharStats> {
        param
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|i| self.class_row(i))
    }

    /// "+N to <Class> Skill Levels" text key, localized.
    pub fn class_all_skills(&self, param: &str) -> String {
        match self.class_row_for(param) {
            Some(row) => self.strings.get(&row.str_all_skills),
            None => placeholder(param),
        }
    }

    /// "(<Class> Only)" for a class index.
    pub fn class_only(&self, index: usize) -> Option<String> {
        self.class_row(index)
            .filter(|row| !row.str_class_only.is_empty())
            .map(|row| self.strings.get(&row.str_class_only))
    }

    /// "(<Class> Only)" for a three-letter class code such as `pal`.
    pub fn class_only_for_code(&self, code: &str) -> Option<String> {
        let class = CharClass::from_str(code.trim()).ok()?;
        self.class_only(class as usize)
    }

    /// Skill tab text for `param = class * 8 + tab`, plus the class index.
    pub fn skill_tab(&self, param: &str) -> (String, Option<usize>) {
        let Ok(value) = param.trim().parse::<usize>() else {
            return (placeholder(param), None);
        };
        let (class, tab) = (value / 8, value % 8);
        match self.class_row(class).and_then(|row| row.str_skill_tabs.get(tab)) {
            Some(key) if !key.is_empty() => (self.strings.get(key), Some(class)),
            _ => (placeholder(param), None),
        }
    }

    /// Monster display name by `hcIdx` (row number when blank) or `Id`.
    pub fn monster_name(&self, id: &str) -> String {
        let key = id.trim();
        let monsters = &self.data.monsters;
        let found = monsters
            .iter()
            .find(|m| !m.hc_idx.is_empty() && m.hc_idx == key)
            .or_else(|| {
                key.parse::<usize>()
                    .ok()
                    .and_then(|i| monsters.get(i))
                    .filter(|m| m.hc_idx.is_empty())
            })
            .or_else(|| monsters.iter().find(|m| m.id.eq_ignore_ascii_case(key)));
        match found {
            Some(m) => self.strings.get(&m.name_str),
            None => placeholder(id),
        }
    }

    /// Plural monster type name by row number or type code.
    pub fn monster_type_name(&self, param: &str) -> String {
        let key = param.trim();
        let found = key
            .parse::<usize>()
            .ok()
            .and_then(|i| self.data.monster_types.get(i))
            .or_else(|| self.data.monster_type(key));
        match found {
            Some(t) => self.strings.get(&t.str_plural),
            None => placeholder(param),
        }
    }

    pub fn level_name(&self, id: &str) -> String {
        match self.data.level(id.trim()) {
            Some(level) => self.strings.get(&level.level_name),
            None => placeholder(id),
        }
    }

    /// Display name of a base item code.
    pub fn item_name(&self, code: &str) -> Option<String> {
        let item = self.data.item(code)?;
        Some(if item.name_str.is_empty() {
            item.name.clone()
        } else {
            self.strings.get(&item.name_str)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use d2txt_data::{StringTables, Table};

    use super::*;
    use crate::{Localizer, RenderConfig};

    fn dataset() -> Dataset {
        let tables = [
            (
                "ItemTypes",
                "ItemType\tCode\tEquiv1\tEquiv2\n\
                 Any Weapon\tweap\t\t\n\
                 Melee Weapon\tmele\tweap\t\n\
                 Sword\tswor\tmele\t\n\
                 Ring\tring\tmisc\t\n\
                 Miscellaneous\tmisc\t\t\n\
                 Rune\trune\tmisc\t\n\
                 Cycle One\tcyc1\tcyc2\t\n\
                 Cycle Two\tcyc2\tcyc1\t\n",
            ),
            ("Weapons", "name\tcode\ttype\nCrystal Sword\tcrs\tswor\nCyclic Blade\tcyb\tcyc1\n"),
            ("Misc", "name\tcode\ttype\tnamestr\nRing\trin\tring\trin\nEl Rune\tr01\trune\t\n"),
            (
                "CharStats",
                "class\tStrAllSkills\tStrSkillTab1\tStrSkillTab2\tStrSkillTab3\tStrClassOnly\n\
                 Amazon\tModStr3a\tTab1\tTab2\tTab3\tAmaOnly\n\
                 Sorceress\t\t\t\t\tSorOnly\n\
                 Necromancer\t\t\t\t\t\n\
                 Paladin\tModStr3d\tTab4\tTab5\tTab6\tPalOnly\n\
                 Barbarian\t\t\t\t\t\n\
                 Expansion\t\t\t\t\t\n\
                 Druid\tModStre8a\t\t\t\tDruOnly\n\
                 Assassin\t\t\t\t\t\n",
            ),
            (
                "Skills",
                "skill\tId\tcharclass\tskilldesc\nFire Bolt\t36\tsor\tfire bolt\nMight\t98\tpal\t\n",
            ),
            ("SkillDesc", "skilldesc\tstr name\nfire bolt\tSkillname37\n"),
            ("MonStats", "Id\thcIdx\tNameStr\nskeleton1\t0\tSkeleton\nfallen1\t19\tFallen\n"),
            ("MonType", "type\tstrplur\nundead\tStrMonType2\ndemon\tStrMonType3\n"),
            ("Levels", "Name\tId\tLevelName\nAct 1 - Cow\t39\tMoo Moo Farm\n"),
        ];
        let tables: HashMap<String, Table> = tables
            .into_iter()
            .map(|(name, text)| (name.to_string(), Table::parse(text).expect("parse")))
            .collect();
        Dataset::from_tables(tables)
    }

    fn strings() -> Localizer {
        let table = Table::parse(
            "Key\tenUS\n\
             ModStr3a\tto Amazon Skill Levels\n\
             ModStre8a\tto Druid Skill Levels\n\
             Tab5\t+%d to Offensive Auras\n\
             PalOnly\t(Paladin Only)\n\
             Skillname37\tFire Bolt\n\
             Fallen\tFallen\n\
             StrMonType3\tDemons\n\
             Moo Moo Farm\tMoo Moo Farm\n\
             rin\tRing\n",
        )
        .expect("parse strings");
        Localizer::new(StringTables::new(vec![("string".into(), table)]))
    }

    #[test]
    fn type_equivalence() {
        let data = dataset();
        let crs = data.item("crs").expect("crs");
        assert!(item_type_is_of_type(&data, crs, "weap"));
        assert!(item_type_is_of_type(&data, crs, "swor"));
        assert!(!item_type_is_of_type(&data, crs, "misc"));
    }

    #[test]
    fn type_cycle_terminates() {
        let data = dataset();
        let cyb = data.item("cyb").expect("cyb");
        assert!(item_type_is_of_type(&data, cyb, "cyc2"));
        assert!(!item_type_is_of_type(&data, cyb, "weap"));
    }

    #[test]
    fn matching_types() {
        let data = dataset();
        let codes: Vec<_> = items_matching_types(&data, &["misc"], &["rune"])
            .into_iter()
            .map(|i| i.code.as_str())
            .collect();
        assert_eq!(codes, vec!["rin"]);
        assert_eq!(items_matching_types(&data, &["weap"], &[]).len(), 1);
    }

    #[test]
    fn names() {
        let data = dataset();
        let strings = strings();
        let config = RenderConfig::default();
        let ctx = Context::new(&data, &strings, &config);
        assert_eq!(ctx.skill_name("36"), "Fire Bolt");
        assert_eq!(ctx.skill_name("fire bolt"), "Fire Bolt");
        assert_eq!(ctx.skill_name("Might"), "Might");
        assert_eq!(ctx.skill_name("999"), "<999>");
        assert_eq!(ctx.monster_name("19"), "Fallen");
        assert_eq!(ctx.monster_name("nobody"), "<nobody>");
        assert_eq!(ctx.monster_type_name("1"), "Demons");
        assert_eq!(ctx.monster_type_name("demon"), "Demons");
        assert_eq!(ctx.level_name("39"), "Moo Moo Farm");
        assert_eq!(ctx.item_name("rin").as_deref(), Some("Ring"));
        assert_eq!(ctx.item_name("r01").as_deref(), Some("El Rune"));
    }

    #[test]
    fn classes_skip_divider() {
        let data = dataset();
        let strings = strings();
        let config = RenderConfig::default();
        let ctx = Context::new(&data, &strings, &config);
        assert_eq!(ctx.class_all_skills("0"), "to Amazon Skill Levels");
        assert_eq!(ctx.class_all_skills("5"), "to Druid Skill Levels");
        assert_eq!(ctx.class_all_skills("7"), "<7>");
        assert_eq!(ctx.class_only_for_code("pal").as_deref(), Some("(Paladin Only)"));
        assert_eq!(ctx.class_only_for_code("xyz"), None);
    }

    #[test]
    fn skill_tabs() {
        let data = dataset();
        let strings = strings();
        let config = RenderConfig::default();
        let ctx = Context::new(&data, &strings, &config);
        assert_eq!(ctx.skill_tab("25"), ("+%d to Offensive Auras".to_string(), Some(3)));
        assert_eq!(ctx.skill_tab("5").1, None);
    }
}
