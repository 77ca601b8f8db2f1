//! Cube recipe evaluation.
//!
//! An input or output specifier is a comma-separated list: an item
//! reference followed by qualifier tokens, each `name` or `name=value`.

use d2txt_types::{CubeActions, CubeOutput, CubeRecipe, MagicAffix, OutputSlot, parse_number};
use serde::Serialize;
use strum::IntoEnumIterator;
use winnow::combinator::{opt, preceded};
use winnow::token::{rest, take_till};
use winnow::{ModalResult, Parser};

use crate::Context;
use crate::format::{Arg, format_positional};
use crate::lookup::placeholder;

const ANY_ITEM: &str = "any";
const USE_ITEM: &str = "useitem";
const USE_TYPE: &str = "usetype";
const COW_PORTAL: &str = "Cow Portal";
const RED_PORTAL: &str = "Red Portal";

/// Chance values that mean the mod always applies.
const CERTAIN_CHANCES: [&str; 3] = ["", "0", "100"];

/// Everything a recipe takes and gives, as display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub description: String,
    pub inputs: Vec<String>,
    /// Non-empty output blocks: the item name followed by its extra lines.
    pub outputs: Vec<(OutputSlot, Vec<String>)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Qualifier<'s> {
    name: &'s str,
    value: Option<&'s str>,
}

impl Qualifier<'_> {
    fn number(&self) -> Option<f64> {
        self.value.map(parse_number).filter(|v| v.is_finite())
    }
}

fn qualifier<'s>(input: &mut &'s str) -> ModalResult<Qualifier<'s>> {
    (take_till(1.., '='), opt(preceded('=', rest)))
        .map(|(name, value): (&'s str, Option<&'s str>)| Qualifier {
            name: name.trim(),
            value: value.map(str::trim),
        })
        .parse_next(input)
}

/// Split a specifier into its item token and parsed qualifiers.
fn split_spec(spec: &str) -> (&str, Vec<Qualifier<'_>>) {
    let spec = spec.trim().trim_matches('"');
    let mut tokens = spec.split(',').map(str::trim);
    let item = tokens.next().unwrap_or_default();
    let qualifiers = tokens
        .filter(|t| !t.is_empty())
        .filter_map(|t| match qualifier.parse(t) {
            Ok(q) => Some(q),
            Err(e) => {
                log::debug!("bad cube qualifier {t:?}: {e}");
                None
            }
        })
        .collect();
    (item, qualifiers)
}

impl Context<'_> {
    /// Display name of an input specifier, or `""` when its item is unknown.
    pub fn evaluate_input(&self, spec: &str) -> String {
        let (item, qualifiers) = split_spec(spec);
        let Some(name) = self.resolve_item(item) else {
            log::debug!("unknown cube input {item:?}");
            return String::new();
        };
        qualifiers
            .iter()
            .fold(name, |name, q| self.apply_qualifier(name, q))
    }

    /// The display name of one output block followed by its extra lines.
    /// An empty block yields nothing.
    pub fn evaluate_output(&self, recipe: &CubeRecipe, slot: OutputSlot) -> Vec<String> {
        let block = recipe.output(slot);
        if block.is_empty() {
            return Vec::new();
        }
        let cfg = &self.config.cube;
        let (item, qualifiers) = split_spec(&block.output);

        if let Some(text) = cfg.hardcoded.get(item) {
            return vec![text.clone()];
        }
        if item.eq_ignore_ascii_case(COW_PORTAL) {
            let mut lines = vec![self.portal(&cfg.cow_level)];
            lines.extend(self.mod_lines(block));
            return lines;
        }
        if item.eq_ignore_ascii_case(RED_PORTAL) {
            let level = qualifiers
                .iter()
                .find(|q| matches!(q.name, "lvl" | "qty") && q.value.is_some())
                .and_then(|q| q.value)
                .unwrap_or(block.lvl.as_str());
            let mut lines = vec![self.portal(level)];
            lines.extend(self.mod_lines(block));
            return lines;
        }

        let mut name = if item.eq_ignore_ascii_case(USE_ITEM) {
            cfg.use_item.clone()
        } else if item.eq_ignore_ascii_case(USE_TYPE) {
            cfg.use_type.clone()
        } else {
            self.resolve_item(item).unwrap_or_else(|| placeholder(item))
        };

        let mut affix_lines = Vec::new();
        let mut actions = CubeActions::empty();
        for q in &qualifiers {
            if let Some(action) = CubeActions::from_token(q.name) {
                actions |= action;
                continue;
            }
            match q.name {
                "pre" => {
                    if let Some(affix) = self.affix(&self.data.prefixes, q) {
                        let prefix = self.strings.get(&affix.name);
                        name = format_positional(&cfg.prefix, &[prefix.into(), name.into()]);
                        affix_lines.extend(self.describe(&affix.properties));
                    }
                }
                "suf" => {
                    if let Some(affix) = self.affix(&self.data.suffixes, q) {
                        let suffix = self.strings.get(&affix.name);
                        name = format_positional(&cfg.suffix, &[name.into(), suffix.into()]);
                        affix_lines.extend(self.describe(&affix.properties));
                    }
                }
                _ => name = self.apply_qualifier(name, q),
            }
        }

        let mut lines = vec![name];
        lines.extend(affix_lines);
        lines.extend(cfg.actions.lines(actions));
        lines.extend(self.level_lines(block));
        lines.extend(self.mod_lines(block));
        lines
    }

    /// Evaluate every input and output block of `recipe`.
    pub fn evaluate_recipe(&self, recipe: &CubeRecipe) -> RecipeSummary {
        RecipeSummary {
            description: recipe.description.clone(),
            inputs: recipe
                .inputs
                .iter()
                .map(|spec| self.evaluate_input(spec))
                .filter(|input| !input.is_empty())
                .collect(),
            outputs: OutputSlot::iter()
                .map(|slot| (slot, self.evaluate_output(recipe, slot)))
                .filter(|(_, lines)| !lines.is_empty())
                .collect(),
        }
    }

    /// Item display name by unique index, set item index, base item code,
    /// item type code, or `any`.
    fn resolve_item(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        if token.eq_ignore_ascii_case(ANY_ITEM) {
            return Some(self.config.cube.any_item.clone());
        }
        if let Some(unique) = self.data.unique(token) {
            return Some(self.strings.get(&unique.index));
        }
        if let Some(set_item) = self.data.set_item(token) {
            return Some(self.strings.get(&set_item.index));
        }
        if let Some(name) = self.item_name(token) {
            return Some(name);
        }
        self.data.item_type(token).map(|ty| ty.name.clone())
    }

    fn apply_qualifier(&self, name: String, q: &Qualifier<'_>) -> String {
        let cfg = &self.config.cube;
        match (q.name, q.number()) {
            ("qty", Some(n)) => format_positional(&cfg.quantity, &[name.into(), Arg::Num(n)]),
            ("sock", Some(n)) => format_positional(&cfg.socket_count, &[name.into(), Arg::Num(n)]),
            (token, _) => match cfg.qualifiers.get(token) {
                Some(template) => format_positional(template, &[name.into()]),
                None => {
                    log::debug!("ignoring cube qualifier {token:?}");
                    name
                }
            },
        }
    }

    fn affix<'d>(&self, table: &'d [MagicAffix], q: &Qualifier<'_>) -> Option<&'d MagicAffix> {
        let index = q.value.and_then(|v| v.parse::<usize>().ok());
        let affix = index.and_then(|i| table.get(i));
        if affix.is_none() {
            log::debug!("{}={:?} is not an affix row", q.name, q.value);
        }
        affix
    }

    fn portal(&self, level: &str) -> String {
        let name = self.level_name(level);
        format_positional(&self.config.cube.portal, &[name.into()])
    }

    fn level_lines(&self, block: &CubeOutput) -> Vec<String> {
        let cfg = &self.config.cube;
        [
            (&block.lvl, &cfg.level),
            (&block.plvl, &cfg.player_level),
            (&block.ilvl, &cfg.item_level),
        ]
        .into_iter()
        .filter(|(value, _)| !value.trim().is_empty())
        .map(|(value, template)| format_positional(template, &[Arg::Num(parse_number(value))]))
        .collect()
    }

    fn mod_lines(&self, block: &CubeOutput) -> Vec<String> {
        let mut lines = Vec::new();
        for m in &block.mods {
            let described = self.describe(std::slice::from_ref(&m.property));
            let chance = m.chance.trim();
            if CERTAIN_CHANCES.contains(&chance) {
                lines.extend(described);
            } else {
                lines.extend(described.into_iter().map(|line| {
                    format_positional(&self.config.cube.chance, &[chance.into(), line.into()])
                }));
            }
        }
        lines
    }
}
