//! Per-stat text rules, selected by a stat's description function code.

use d2txt_types::DescFormat;

use crate::Context;
use crate::format::{Arg, format_number, format_positional, format_range, has_placeholders, range_arg};
use crate::lookup::placeholder;

/// The values one line is rendered from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject<'s> {
    pub name: &'s str,
    pub param: &'s str,
    pub min: f64,
    pub max: f64,
}

impl Subject<'_> {
    fn value(&self) -> Arg {
        range_arg(self.min, self.max)
    }
}

fn localized(ctx: &Context<'_>, key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        ctx.strings.get(key)
    }
}

/// Join the non-empty parts with single spaces.
fn words<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Positional substitution when `text` has placeholders, else `plain`.
fn fill(text: &str, args: &[Arg], plain: impl FnOnce() -> String) -> String {
    if has_placeholders(text) {
        format_positional(text, args)
    } else {
        plain()
    }
}

/// `+` in front of a non-negative range.
fn signed(min: f64, max: f64) -> String {
    let range = format_range(min, max);
    if min >= 0.0 && max >= 0.0 {
        format!("+{range}")
    } else {
        range
    }
}

/// Value placement per `descval`: 0 hides it, 2 puts it last, anything else first.
fn compose(val: Option<i32>, number: &str, text: &str) -> String {
    match val {
        Some(0) => text.to_string(),
        Some(2) => words(&[text, number]),
        _ => words(&[number, text]),
    }
}

pub(crate) fn render(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>) -> String {
    let Some(func) = desc.func else {
        return String::new();
    };
    match func {
        0 => String::new(),
        1..=10 | 12 | 20 | 21 => basic(ctx, desc, func, s),
        11 => repair(ctx, desc, s),
        13 => class_skills(ctx, s),
        14 => skill_tab(ctx, s),
        15 => chance_to_cast(ctx, desc, s),
        16 => aura(ctx, desc, s),
        17 | 18 => by_time(ctx, desc, func, s),
        19 => {
            let text = localized(ctx, &desc.str_pos);
            fill(&text, &[s.value()], || {
                compose(desc.val, &format_range(s.min, s.max), &text)
            })
        }
        22 => versus_monster_type(ctx, desc, s),
        23 => reanimate(ctx, desc, s),
        24 => charges(ctx, desc, s),
        27 => single_skill(ctx, desc, s, true),
        28 => single_skill(ctx, desc, s, false),
        _ => format_positional(
            &ctx.config.unhandled,
            &[Arg::Num(f64::from(func)), s.name.into()],
        ),
    }
}

fn basic(ctx: &Context<'_>, desc: &DescFormat, func: i32, s: &Subject<'_>) -> String {
    let (mut min, mut max) = (s.min, s.max);
    if matches!(func, 5 | 10) {
        min = (min * 100.0 / 128.0).floor();
        max = (max * 100.0 / 128.0).floor();
    }
    if matches!(func, 20 | 21) {
        min = -min;
        max = -max;
    }

    let key = if max < 0.0 && !desc.str_neg.is_empty() {
        &desc.str_neg
    } else {
        &desc.str_pos
    };
    let text = localized(ctx, key);
    let mut line = fill(&text, &[range_arg(min, max)], || {
        let mut number = if matches!(func, 1 | 4 | 6 | 8 | 12) {
            signed(min, max)
        } else {
            format_range(min, max)
        };
        if matches!(func, 2 | 4 | 5 | 7 | 8 | 10 | 20) {
            number.push('%');
        }
        compose(desc.val, &number, &text)
    });

    if (6..=10).contains(&func) && !desc.str2.is_empty() {
        line = words(&[&line, &localized(ctx, &desc.str2)]);
    }
    line
}

fn repair(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>) -> String {
    if s.max == 0.0 {
        return String::new();
    }
    let seconds = (100.0 / s.max).round();
    let text = localized(ctx, &desc.str_pos);
    fill(&text, &[Arg::Num(seconds)], || {
        compose(desc.val, &format_number(seconds), &text)
    })
}

fn class_skills(ctx: &Context<'_>, s: &Subject<'_>) -> String {
    let text = ctx.class_all_skills(s.param);
    fill(&text, &[s.value()], || words(&[&signed(s.min, s.max), &text]))
}

fn skill_tab(ctx: &Context<'_>, s: &Subject<'_>) -> String {
    let (text, class) = ctx.skill_tab(s.param);
    let mut line = fill(&text, &[s.value()], || words(&[&signed(s.min, s.max), &text]));
    if let Some(only) = class.and_then(|c| ctx.class_only(c)) {
        line.push_str(&ctx.config.class_only_separator);
        line.push_str(&only);
    }
    line
}

/// `min` is the chance, `max` the skill level.
fn chance_to_cast(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>) -> String {
    let text = localized(ctx, &desc.str_pos);
    let skill = ctx.skill_name(s.param);
    fill(
        &text,
        &[Arg::Num(s.min), Arg::Num(s.max), skill.as_str().into()],
        || words(&[&text, &skill]),
    )
}

fn aura(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>) -> String {
    let text = localized(ctx, &desc.str_pos);
    let skill = ctx.skill_name(s.param);
    fill(&text, &[s.value(), skill.as_str().into()], || {
        words(&[&text, &skill])
    })
}

fn by_time(ctx: &Context<'_>, desc: &DescFormat, func: i32, s: &Subject<'_>) -> String {
    let text = localized(ctx, &desc.str_pos);
    let base = fill(&text, &[s.value()], || {
        let mut number = signed(s.min, s.max);
        if func == 18 {
            number.push('%');
        }
        compose(desc.val, &number, &text)
    });
    let time = s
        .param
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|i| ctx.config.time_of_day.get(i))
        .cloned()
        .unwrap_or_else(|| placeholder(s.param));
    let suffix = format_positional(&ctx.config.time_of_day_suffix, &[time.into()]);
    words(&[&base, &suffix])
}

fn versus_monster_type(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>) -> String {
    let text = localized(ctx, &desc.str_pos);
    let monsters = ctx.monster_type_name(s.param);
    fill(&text, &[s.value(), monsters.as_str().into()], || {
        let number = format!("{}%", signed(s.min, s.max));
        words(&[&number, &text, &monsters])
    })
}

fn reanimate(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>) -> String {
    let text = localized(ctx, &desc.str_pos);
    let monster = ctx.monster_name(s.param);
    fill(&text, &[s.value(), monster.as_str().into()], || {
        let number = format!("{}%", format_range(s.min, s.max));
        words(&[&number, &text, &monster])
    })
}

/// `min` is the charge count, `max` the skill level.
fn charges(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>) -> String {
    let text = localized(ctx, &desc.str_pos);
    let skill = ctx.skill_name(s.param);
    fill(
        &text,
        &[
            Arg::Num(s.max),
            skill.as_str().into(),
            Arg::Num(s.min),
            Arg::Num(s.min),
        ],
        || words(&[&text, &skill]),
    )
}

fn single_skill(ctx: &Context<'_>, desc: &DescFormat, s: &Subject<'_>, class_only: bool) -> String {
    let text = localized(ctx, &desc.str_pos);
    let skill = ctx.skill_name(s.param);
    let mut line = fill(&text, &[s.value(), skill.as_str().into()], || {
        words(&[&signed(s.min, s.max), &text, &skill])
    });
    if class_only {
        let only = ctx
            .skill(s.param)
            .and_then(|sk| ctx.class_only_for_code(&sk.char_class));
        if let Some(only) = only {
            line.push_str(&ctx.config.class_only_separator);
            line.push_str(&only);
        }
    }
    line
}
