//! Localized string lookup with a per-run memo cache.

use std::cell::RefCell;
use std::collections::HashMap;

use d2txt_data::StringTables;

use crate::format::{Arg, format_positional};

pub const DEFAULT_LANGUAGE: &str = "enUS";

/// Returned for every key when no string table was loaded.
pub const STRINGS_NOT_LOADED: &str = "[strings not loaded]";

const COLOR_PREFIX: &str = "ÿc";

/// In-game color codes (`ÿc` + one character) and the token name each becomes.
const COLORS: [(char, &str); 33] = [
    ('0', "white"),
    ('1', "red"),
    ('2', "green"),
    ('3', "blue"),
    ('4', "gold"),
    ('5', "gray"),
    ('6', "black"),
    ('7', "tan"),
    ('8', "orange"),
    ('9', "yellow"),
    (':', "darkgreen"),
    (';', "purple"),
    ('/', "brightwhite"),
    ('.', "darkgray"),
    ('A', "forestgreen"),
    ('B', "lightblue"),
    ('C', "lightgreen"),
    ('D', "lightgold"),
    ('E', "lightgray"),
    ('F', "lightred"),
    ('G', "lightorange"),
    ('H', "lightpurple"),
    ('I', "turquoise"),
    ('J', "pink"),
    ('K', "lightyellow"),
    ('L', "coral"),
    ('M', "darkred"),
    ('N', "cyan"),
    ('O', "violet"),
    ('P', "lightteal"),
    ('Q', "teal"),
    ('R', "lightcoral"),
    ('S', "darkteal"),
];

fn color_name(code: char) -> Option<&'static str> {
    COLORS.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Replace each `ÿcX` color code with a `{color:NAME}` token; unknown codes are kept.
pub fn substitute_colors(text: &str) -> String {
    if !text.contains(COLOR_PREFIX) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;
    while let Some(pos) = rest.find(COLOR_PREFIX) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + COLOR_PREFIX.len()..];
        let code = after.chars().next();
        match code.and_then(|c| color_name(c).map(|name| (c, name))) {
            Some((c, name)) => {
                out.push_str("{color:");
                out.push_str(name);
                out.push('}');
                rest = &after[c.len_utf8()..];
            }
            None => {
                out.push_str(COLOR_PREFIX);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// String lookup for one language.
///
/// Results, including placeholders for missing keys, are cached by
/// lowercase key for the lifetime of the localizer; entries are never replaced.
#[derive(Debug, Default)]
pub struct Localizer {
    tables: StringTables,
    language: String,
    cache: RefCell<HashMap<String, String>>,
}

impl Localizer {
    pub fn new(tables: StringTables) -> Self {
        Self::with_language(tables, DEFAULT_LANGUAGE)
    }

    pub fn with_language(tables: StringTables, language: impl Into<String>) -> Self {
        Self {
            tables,
            language: language.into(),
            cache: RefCell::default(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The localized text for `key`, or `<key>` when no table has it.
    pub fn get(&self, key: &str) -> String {
        if self.tables.is_empty() {
            return STRINGS_NOT_LOADED.to_string();
        }
        let memo = key.to_ascii_lowercase();
        if let Some(hit) = self.cache.borrow().get(&memo) {
            return hit.clone();
        }
        let text = match self.tables.find(key, &self.language) {
            Some(text) => substitute_colors(text),
            None => {
                log::debug!("string {key:?} not found for {}", self.language);
                format!("<{key}>")
            }
        };
        self.cache.borrow_mut().entry(memo).or_insert(text).clone()
    }

    /// True when a loaded table has `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.tables.find(key, &self.language).is_some()
    }

    /// [`get`](Self::get) followed by positional substitution of `args`.
    pub fn format(&self, key: &str, args: &[Arg]) -> String {
        format_positional(&self.get(key), args)
    }

    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use d2txt_data::Table;

    use super::*;

    fn localizer() -> Localizer {
        let table = Table::parse(
            "Key\tenUS\tdeDE\n\
             ModStr1a\tto Strength\tzu Stärke\n\
             ItemExpansiveChancX\t%d%% Chance to cast level %d %s on striking\t\n\
             Tagged\tÿc4Gold ÿc1Red ÿcZbad\t\n",
        )
        .expect("parse strings");
        Localizer::new(StringTables::new(vec![("string".into(), table)]))
    }

    #[test]
    fn case_insensitive_lookup() {
        let l = localizer();
        assert_eq!(l.get("modstr1a"), "to Strength");
        assert_eq!(l.get("MODSTR1A"), "to Strength");
        assert_eq!(l.cached(), 1);
    }

    #[test]
    fn missing_key_placeholder() {
        assert_eq!(localizer().get("nope"), "<nope>");
    }

    #[test]
    fn nothing_loaded() {
        let l = Localizer::new(StringTables::default());
        assert_eq!(l.get("ModStr1a"), STRINGS_NOT_LOADED);
    }

    #[test]
    fn color_codes() {
        assert_eq!(
            localizer().get("Tagged"),
            "{color:gold}Gold {color:red}Red ÿcZbad"
        );
    }

    #[test]
    fn color_tokens_are_distinct() {
        for (i, (code, name)) in COLORS.iter().enumerate() {
            assert!(
                COLORS[i + 1..].iter().all(|(c, n)| c != code && n != name),
                "duplicate color entry {code:?} {name}"
            );
        }
        assert_eq!(substitute_colors("ÿc:a ÿcAb"), "{color:darkgreen}a {color:forestgreen}b");
    }

    #[test]
    fn formatted() {
        let out = localizer().format(
            "ItemExpansiveChancX",
            &[Arg::Num(5.0), Arg::Num(4.0), "Fire Bolt".into()],
        );
        assert_eq!(out, "5% Chance to cast level 4 Fire Bolt on striking");
    }

    #[test]
    fn other_language() {
        let table = Table::parse("Key\tenUS\tdeDE\nModStr1a\tto Strength\tzu Stärke\n")
            .expect("parse strings");
        let l = Localizer::with_language(StringTables::new(vec![("s".into(), table)]), "deDE");
        assert_eq!(l.get("ModStr1a"), "zu Stärke");
        assert_eq!(l.language(), "deDE");
    }
}
