//! Description rendering: stat entries to ordered text lines.
//!
//! Each entry renders through the first rule that claims it: the ethereal
//! marker, a complete display group, a min/max damage pair, or the stat's
//! own description function. Lines that share a group collapse to the first
//! one, and the survivors are sorted by descending priority.

use std::collections::HashSet;

use d2txt_types::{ItemStat, parse_number};
use serde::Serialize;

use crate::Context;
use crate::descfunc::{self, Subject};
use crate::expand::{EntryStat, ItemStatEntry};
use crate::format::{Arg, format_positional, range_arg};

pub const ENHANCED_DAMAGE_PRIORITY: f64 = 1000.0;
pub const ETHEREAL_PRIORITY: f64 = -1.0;
const ETHEREAL_GROUP: i32 = i32::MIN;

const MIN_DAMAGE_STAT: &str = "mindamage";
const MAX_DAMAGE_STAT: &str = "maxdamage";
const POISON_LENGTH_STAT: &str = "poisonlength";

/// Stats that never render a line of their own.
const SUPPRESSED_STATS: [&str; 3] = ["coldlength", "poisonlength", "poison_count"];

/// Shift used for per-level values when the stat has no `op param`.
const DEFAULT_LEVEL_SHIFT: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionLine {
    pub text: String,
    pub priority: f64,
    pub group: Option<i32>,
}

impl DescriptionLine {
    pub fn new(text: impl Into<String>, priority: f64, group: Option<i32>) -> Self {
        Self {
            text: text.into(),
            priority,
            group,
        }
    }
}

/// A min/max stat pair rendered as one line when both halves are present.
struct DamagePair {
    min: &'static str,
    max: &'static str,
    group: i32,
    range: &'static str,
    same: &'static str,
}

const POISON_GROUP: i32 = -104;

static DAMAGE_PAIRS: [DamagePair; 6] = [
    DamagePair {
        min: "firemindam",
        max: "firemaxdam",
        group: -100,
        range: "strModFireDamageRange",
        same: "strModFireDamage",
    },
    DamagePair {
        min: "lightmindam",
        max: "lightmaxdam",
        group: -101,
        range: "strModLightningDamageRange",
        same: "strModLightningDamage",
    },
    DamagePair {
        min: "magicmindam",
        max: "magicmaxdam",
        group: -102,
        range: "strModMagicDamageRange",
        same: "strModMagicDamage",
    },
    DamagePair {
        min: "coldmindam",
        max: "coldmaxdam",
        group: -103,
        range: "strModColdDamageRange",
        same: "strModColdDamage",
    },
    DamagePair {
        min: "poisonmindam",
        max: "poisonmaxdam",
        group: POISON_GROUP,
        range: "strModPoisonDamageRange",
        same: "strModPoisonDamage",
    },
    DamagePair {
        min: MIN_DAMAGE_STAT,
        max: MAX_DAMAGE_STAT,
        group: -105,
        range: "strModMinDamageRange",
        same: "strModMinDamage",
    },
];

fn find_stat<'e, 'a>(entries: &'e [ItemStatEntry<'a>], name: &str) -> Option<&'e ItemStatEntry<'a>> {
    entries
        .iter()
        .find(|e| e.stat_name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
}

/// Drop empty lines, keep the first line of each group, sort by descending
/// priority. Equal priorities keep their order.
pub fn finalize(lines: Vec<DescriptionLine>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept: Vec<DescriptionLine> = lines
        .into_iter()
        .filter(|line| !line.text.is_empty())
        .filter(|line| line.group.is_none_or(|g| seen.insert(g)))
        .collect();
    kept.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    kept.into_iter().map(|line| line.text).collect()
}

impl<'a> Context<'a> {
    /// Render `entries` to sorted text.
    pub fn render_descriptions(&self, entries: &[ItemStatEntry<'_>]) -> Vec<String> {
        finalize(self.render_lines(entries))
    }

    /// Render `entries` to unsorted lines, one per claimed rule.
    pub fn render_lines(&self, entries: &[ItemStatEntry<'_>]) -> Vec<DescriptionLine> {
        let mut lines = Vec::new();
        let entries = self.damage_prepass(entries, &mut lines);
        let mut claimed = HashSet::new();

        for entry in &entries {
            match entry.stat {
                EntryStat::Ethereal => lines.push(DescriptionLine::new(
                    self.config.ethereal.clone(),
                    ETHEREAL_PRIORITY,
                    Some(ETHEREAL_GROUP),
                )),
                EntryStat::Missing => {}
                EntryStat::Stat(stat) => {
                    if let Some(line) = self.render_entry(entry, stat, &entries, &mut claimed) {
                        lines.push(line);
                    }
                }
            }
        }
        lines
    }

    /// Damage functions 5 and 6 become `mindamage`/`maxdamage` entries;
    /// function 7 renders the enhanced damage line directly.
    fn damage_prepass<'e>(
        &self,
        entries: &[ItemStatEntry<'e>],
        lines: &mut Vec<DescriptionLine>,
    ) -> Vec<ItemStatEntry<'e>>
    where
        'a: 'e,
    {
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            let synthesized = match (entry.stat, entry.func) {
                (EntryStat::Missing, 5) => (MIN_DAMAGE_STAT, entry.min),
                (EntryStat::Missing, 6) => (MAX_DAMAGE_STAT, entry.max),
                (EntryStat::Missing, 7) => {
                    let text = format_positional(
                        &self.config.enhanced_damage,
                        &[range_arg(entry.min, entry.max)],
                    );
                    lines.push(DescriptionLine::new(text, ENHANCED_DAMAGE_PRIORITY, None));
                    continue;
                }
                _ => {
                    out.push(entry.clone());
                    continue;
                }
            };
            let (name, value) = synthesized;
            match self.data.stat(name) {
                Some(stat) => out.push(ItemStatEntry {
                    stat: EntryStat::Stat(stat),
                    min: value,
                    max: value,
                    ..entry.clone()
                }),
                None => log::debug!("no {name} stat for damage function {}", entry.func),
            }
        }
        out
    }

    fn render_entry(
        &self,
        entry: &ItemStatEntry<'_>,
        stat: &ItemStat,
        entries: &[ItemStatEntry<'_>],
        claimed: &mut HashSet<i32>,
    ) -> Option<DescriptionLine> {
        if let Some(group) = stat.group {
            if claimed.contains(&group) {
                return None;
            }
            if let Some(line) = self.render_group(group, entries) {
                claimed.insert(group);
                return Some(line);
            }
        }

        let pair = DAMAGE_PAIRS.iter().find(|p| {
            p.min.eq_ignore_ascii_case(&stat.name) || p.max.eq_ignore_ascii_case(&stat.name)
        });
        if let Some(pair) = pair {
            if claimed.contains(&pair.group) {
                return None;
            }
            if let Some(line) = self.render_pair(pair, entries) {
                claimed.insert(pair.group);
                return Some(line);
            }
        }

        Some(DescriptionLine::new(
            self.render_single(entry, stat),
            stat.priority,
            None,
        ))
    }

    /// One line for display group `group`, when every member stat is present
    /// with the same range.
    fn render_group(&self, group: i32, entries: &[ItemStatEntry<'_>]) -> Option<DescriptionLine> {
        let defs: Vec<&ItemStat> = self.data.stats_in_group(group).collect();
        let present: Vec<&ItemStatEntry<'_>> = entries
            .iter()
            .filter(|e| e.item_stat().is_some_and(|s| s.group == Some(group)))
            .collect();
        let first = *present.first()?;
        if present.len() != defs.len()
            || !present.iter().all(|e| e.min == first.min && e.max == first.max)
        {
            return None;
        }

        let stat = first.item_stat()?;
        let priority = defs
            .iter()
            .map(|s| s.priority)
            .fold(f64::NEG_INFINITY, f64::max);
        let subject = Subject {
            name: &stat.name,
            param: &first.param,
            min: first.min,
            max: first.max,
        };
        let text = descfunc::render(self, &stat.group_desc, &subject);
        Some(DescriptionLine::new(text, priority, Some(group)))
    }

    fn render_pair(&self, pair: &DamagePair, entries: &[ItemStatEntry<'_>]) -> Option<DescriptionLine> {
        let low = find_stat(entries, pair.min)?;
        let high = find_stat(entries, pair.max)?;
        let same = low.min == high.min && low.max == high.max;

        let mut args = vec![range_arg(low.min, low.max)];
        if !same {
            args.push(range_arg(high.min, high.max));
        }
        if pair.group == POISON_GROUP {
            args.push(Arg::Num(poison_length(entries)));
        }

        let key = if same { pair.same } else { pair.range };
        let priority = [low, high]
            .iter()
            .filter_map(|e| e.item_stat())
            .map(|s| s.priority)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(DescriptionLine::new(
            self.strings.format(key, &args),
            priority,
            Some(pair.group),
        ))
    }

    fn render_single(&self, entry: &ItemStatEntry<'_>, stat: &ItemStat) -> String {
        let name = stat.name.as_str();
        if SUPPRESSED_STATS.iter().any(|s| s.eq_ignore_ascii_case(name)) {
            return String::new();
        }

        let (min, max) = if entry.func == 17 {
            self.per_level(entry, stat)
        } else {
            (entry.min, entry.max)
        };

        let cfg = self.config;
        let template = match name.to_ascii_lowercase().as_str() {
            "maxdurability" => Some(&cfg.max_durability),
            "item_numsockets" => Some(&cfg.sockets),
            "item_extrablood" => Some(&cfg.extra_blood),
            "item_levelreq" => Some(&cfg.level_requirement),
            _ => None,
        };
        if let Some(template) = template {
            return format_positional(template, &[range_arg(min, max)]);
        }

        let subject = Subject {
            name,
            param: &entry.param,
            min,
            max,
        };
        descfunc::render(self, &stat.desc, &subject)
    }

    /// Per-level range: `param / 2^shift` at level 1 up to the maximum level.
    fn per_level(&self, entry: &ItemStatEntry<'_>, stat: &ItemStat) -> (f64, f64) {
        let shift = Some(parse_number(&stat.op_param))
            .filter(|s| !stat.op_param.trim().is_empty() && !s.is_nan())
            .unwrap_or(DEFAULT_LEVEL_SHIFT);
        let per_level = parse_number(&entry.param) / 2f64.powf(shift);
        (
            per_level.floor(),
            (per_level * self.data.max_level()).floor(),
        )
    }
}

/// Poison duration in seconds from the `poisonlength` entry, 0 when absent.
fn poison_length(entries: &[ItemStatEntry<'_>]) -> f64 {
    find_stat(entries, POISON_LENGTH_STAT)
        .map(|e| {
            let frames = if e.func == 17 {
                parse_number(&e.param)
            } else {
                e.min
            };
            (frames / 25.0).round()
        })
        .unwrap_or(0.0)
}
