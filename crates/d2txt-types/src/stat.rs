use serde::Serialize;

use crate::columns::{Columns, FromColumns, parse_code, parse_number, text};

/// How one stat (or one display group) is turned into text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescFormat {
    /// Description function code; `None` when blank.
    pub func: Option<i32>,
    /// Value placement: 0 none, 1 before the text, 2 after it. Blank reads as 1.
    pub val: Option<i32>,
    pub str_pos: String,
    pub str_neg: String,
    pub str2: String,
}

/// A row of `ItemStatCost`: one numeric item attribute and its display rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStat {
    pub name: String,
    pub id: String,
    /// Non-blank means two instances of this stat are never combined.
    pub encode: String,
    /// Shift applied to per-level values (`op param`), blank when unused.
    pub op_param: String,
    pub priority: f64,
    pub desc: DescFormat,
    /// Display group shared with sibling stats.
    pub group: Option<i32>,
    pub group_desc: DescFormat,
}

impl ItemStat {
    pub fn is_encoded(&self) -> bool {
        !self.encode.is_empty()
    }
}

impl FromColumns for ItemStat {
    fn from_columns(row: &dyn Columns) -> Self {
        let priority = parse_number(row.column("descpriority"));
        Self {
            name: text(row, "Stat"),
            id: text(row, "ID"),
            encode: text(row, "Encode"),
            op_param: text(row, "op param"),
            priority: if priority.is_nan() { 0.0 } else { priority },
            desc: DescFormat {
                func: parse_code(row.column("descfunc")),
                val: parse_code(row.column("descval")),
                str_pos: text(row, "descstrpos"),
                str_neg: text(row, "descstrneg"),
                str2: text(row, "descstr2"),
            },
            group: parse_code(row.column("dgrp")),
            group_desc: DescFormat {
                func: parse_code(row.column("dgrpfunc")),
                val: parse_code(row.column("dgrpval")),
                str_pos: text(row, "dgrpstrpos"),
                str_neg: text(row, "dgrpstrneg"),
                str2: text(row, "dgrpstr2"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::testing::MapRow;

    #[test]
    fn reads_group_and_format() {
        let row = MapRow::new(&[
            ("Stat", "fireresist"),
            ("descpriority", "36"),
            ("descfunc", "19"),
            ("descstrpos", "ModStr1j"),
            ("dgrp", "2"),
            ("dgrpfunc", "19"),
            ("dgrpstrpos", "strModAllResistances"),
        ]);
        let stat = ItemStat::from_columns(&row);
        assert_eq!(stat.name, "fireresist");
        assert_eq!(stat.priority, 36.0);
        assert_eq!(stat.desc.func, Some(19));
        assert_eq!(stat.desc.val, None);
        assert_eq!(stat.group, Some(2));
        assert_eq!(stat.group_desc.str_pos, "strModAllResistances");
        assert!(!stat.is_encoded());
    }

    #[test]
    fn malformed_priority_sorts_as_zero() {
        let row = MapRow::new(&[("Stat", "x"), ("descpriority", "high"), ("Encode", "2")]);
        let stat = ItemStat::from_columns(&row);
        assert_eq!(stat.priority, 0.0);
        assert!(stat.is_encoded());
        assert_eq!(stat.group, None);
    }
}
