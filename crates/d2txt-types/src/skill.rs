use serde::Serialize;

use crate::columns::{Columns, FromColumns, text};

/// A row of `Skills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    pub id: String,
    /// Three-letter class code, blank for skills no class owns.
    pub char_class: String,
    /// Key into `SkillDesc`.
    pub skill_desc: String,
}

impl FromColumns for Skill {
    fn from_columns(row: &dyn Columns) -> Self {
        // Newer tables prefix the id column with '*'.
        let id = match row.column("Id").trim() {
            "" => text(row, "*Id"),
            id => id.to_string(),
        };
        Self {
            name: text(row, "skill"),
            id,
            char_class: text(row, "charclass"),
            skill_desc: text(row, "skilldesc"),
        }
    }
}

/// A row of `SkillDesc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDesc {
    pub key: String,
    /// String-table key of the skill's display name.
    pub name_str: String,
}

impl FromColumns for SkillDesc {
    fn from_columns(row: &dyn Columns) -> Self {
        Self {
            key: text(row, "skilldesc"),
            name_str: text(row, "str name"),
        }
    }
}
