//! Property expansion: each property slot becomes the stat entries its
//! `Properties` row grants, then equal entries are merged.

use d2txt_data::Dataset;
use d2txt_types::{ItemStat, PropertyReference, PropertySlot, parse_code, parse_number};

/// Stat substituted by property function 20.
pub const INDESTRUCTIBLE_STAT: &str = "item_indesctructible";

/// What an entry's values describe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryStat<'a> {
    Stat(&'a ItemStat),
    /// The item is ethereal; carries no value.
    Ethereal,
    /// Damage functions 5, 6 and 7, whose stats are chosen at render time.
    Missing,
}

/// One (func, stat, val) triple of a property applied to a property slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStatEntry<'a> {
    pub stat: EntryStat<'a>,
    pub param: String,
    pub min: f64,
    pub max: f64,
    /// Property function code, 1..=36.
    pub func: u8,
    /// The triple's `val` column.
    pub raw_value: f64,
}

impl<'a> ItemStatEntry<'a> {
    pub fn item_stat(&self) -> Option<&'a ItemStat> {
        match self.stat {
            EntryStat::Stat(stat) => Some(stat),
            _ => None,
        }
    }

    pub fn stat_name(&self) -> Option<&'a str> {
        self.item_stat().map(|s| s.name.as_str())
    }

    fn combines_with(&self, other: &Self) -> bool {
        match (self.stat, other.stat) {
            (EntryStat::Ethereal, EntryStat::Ethereal) => true,
            (EntryStat::Stat(a), EntryStat::Stat(b)) => {
                !a.is_encoded()
                    && !b.is_encoded()
                    && a.name.eq_ignore_ascii_case(&b.name)
                    && self.param == other.param
            }
            _ => false,
        }
    }
}

fn expand_slot<'a>(
    data: &'a Dataset,
    prop: &PropertyReference,
    slot: &PropertySlot,
) -> Option<ItemStatEntry<'a>> {
    let func = parse_code(&slot.func).filter(|f| (1..=36).contains(f))?;
    if (25..=35).contains(&func) {
        return None;
    }
    let raw_value = parse_number(&slot.val);
    if raw_value.is_nan() {
        log::debug!("{}: bad val {:?}, slot dropped", prop.code, slot.val);
        return None;
    }

    let mut entry = ItemStatEntry {
        stat: EntryStat::Missing,
        param: prop.param.clone(),
        min: prop.min,
        max: prop.max,
        func: func as u8,
        raw_value,
    };
    match entry.func {
        5..=7 => {}
        20 => {
            entry.stat = EntryStat::Stat(data.stat(INDESTRUCTIBLE_STAT)?);
            entry.min = 1.0;
            entry.max = 1.0;
        }
        23 => entry.stat = EntryStat::Ethereal,
        func => {
            let Some(stat) = data.stat(&slot.stat) else {
                log::debug!("{}: unknown stat {:?}, slot dropped", prop.code, slot.stat);
                return None;
            };
            entry.stat = EntryStat::Stat(stat);
            match func {
                2 | 16 => entry.min = entry.max,
                15 => entry.max = entry.min,
                21 => entry.param = slot.val.clone(),
                _ => {}
            }
        }
    }
    Some(entry)
}

/// Merge equal entries, summing their ranges. Encoded stats never merge and
/// ethereal markers collapse to one.
pub fn combine<'a>(entries: Vec<ItemStatEntry<'a>>) -> Vec<ItemStatEntry<'a>> {
    let mut out: Vec<ItemStatEntry<'a>> = Vec::with_capacity(entries.len());
    for entry in entries {
        match out.iter_mut().find(|e| e.combines_with(&entry)) {
            Some(existing) if existing.stat == EntryStat::Ethereal => {}
            Some(existing) => {
                existing.min += entry.min;
                existing.max += entry.max;
            }
            None => out.push(entry),
        }
    }
    out
}

/// Expand every property slot into stat entries, then [`combine`] them.
///
/// Unknown property codes, unknown stats and malformed triples are dropped.
pub fn expand_properties<'a>(
    data: &'a Dataset,
    refs: &[PropertyReference],
) -> Vec<ItemStatEntry<'a>> {
    let mut entries = Vec::new();
    for prop in refs {
        let Some(def) = data.property(&prop.code) else {
            log::debug!("unknown property {:?}", prop.code);
            continue;
        };
        entries.extend(
            def.slots
                .iter()
                .filter_map(|slot| expand_slot(data, prop, slot)),
        );
    }
    combine(entries)
}
