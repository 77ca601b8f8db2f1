//! Number and positional-template formatting.
//!
//! Templates use the game's printf-like placeholders: `%d`, `%+d`, `%i`,
//! `%s` and the numbered `%0`..`%9`. Arguments fill placeholders strictly
//! left to right regardless of the number in a `%N`; `%%` is a literal `%`.

use std::fmt;

/// One argument for [`format_positional`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Num(f64),
    /// A `min..max` span with `min != max`, printed by [`format_range`].
    Range(f64, f64),
    Text(String),
}

impl Arg {
    fn is_non_negative(&self) -> bool {
        match self {
            Arg::Num(v) => *v >= 0.0,
            Arg::Range(min, max) => *min >= 0.0 && *max >= 0.0,
            Arg::Text(_) => false,
        }
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Num(v)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Num(v) => f.write_str(&format_number(*v)),
            Arg::Range(min, max) => f.write_str(&format_range(*min, *max)),
            Arg::Text(s) => f.write_str(s),
        }
    }
}

/// Integral values print without a fraction; NaN prints as `NaN`.
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// `min` alone when equal, else `[min-max]`, or `[min to max]` when either is negative.
pub fn format_range(min: f64, max: f64) -> String {
    if min == max {
        format_number(max)
    } else if min < 0.0 || max < 0.0 {
        format!("[{} to {}]", format_number(min), format_number(max))
    } else {
        format!("[{}-{}]", format_number(min), format_number(max))
    }
}

/// The argument a value range contributes to a template: the number itself
/// when `min == max`, otherwise the range.
pub fn range_arg(min: f64, max: f64) -> Arg {
    if min == max {
        Arg::Num(max)
    } else {
        Arg::Range(min, max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    Percent,
    Plain,
    Signed,
}

/// Recognise the token starting at `bytes[i]`; returns it and its byte length.
fn token_at(text: &str, i: usize) -> (Token, usize) {
    let bytes = text.as_bytes();
    if bytes[i] == b'%' {
        match bytes.get(i + 1) {
            Some(b'%') => return (Token::Percent, 2),
            Some(b'd' | b'i' | b's' | b'0'..=b'9') => return (Token::Plain, 2),
            Some(b'+') if bytes.get(i + 2) == Some(&b'd') => return (Token::Signed, 3),
            _ => {}
        }
    }
    // Not a placeholder; copy one whole character.
    let c = text[i..].chars().next().unwrap_or('%');
    (Token::Literal(c), c.len_utf8())
}

/// True when `template` holds at least one placeholder.
pub fn has_placeholders(template: &str) -> bool {
    let mut i = 0;
    while i < template.len() {
        let (token, len) = token_at(template, i);
        if matches!(token, Token::Plain | Token::Signed) {
            return true;
        }
        i += len;
    }
    false
}

/// Fill the placeholders of `template` with `args` in order.
///
/// Placeholders left over once `args` run out are kept verbatim; a `%+d`
/// gives non-negative numbers and ranges an explicit `+`.
pub fn format_positional(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut i = 0;
    while i < template.len() {
        let (token, len) = token_at(template, i);
        match token {
            Token::Literal(c) => out.push(c),
            Token::Percent => out.push('%'),
            Token::Plain | Token::Signed => match args.next() {
                Some(arg) => {
                    if token == Token::Signed && arg.is_non_negative() {
                        out.push('+');
                    }
                    out.push_str(&arg.to_string());
                }
                None => out.push_str(&template[i..i + len]),
            },
        }
        i += len;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn ranges() {
        assert_eq!(format_range(5.0, 5.0), "5");
        assert_eq!(format_range(5.0, 10.0), "[5-10]");
        assert_eq!(format_range(-10.0, -5.0), "[-10 to -5]");
        assert_eq!(format_range(-5.0, 5.0), "[-5 to 5]");
    }

    #[test]
    fn fills_in_order() {
        let out = format_positional(
            "%d%% Chance to cast level %d %s on striking",
            &[Arg::Num(10.0), Arg::Num(3.0), "Frozen Orb".into()],
        );
        assert_eq!(out, "10% Chance to cast level 3 Frozen Orb on striking");
    }

    #[test]
    fn signed_placeholder() {
        assert_eq!(format_positional("Fire Resist %+d%%", &[Arg::Num(30.0)]), "Fire Resist +30%");
        assert_eq!(format_positional("Fire Resist %+d%%", &[Arg::Num(-30.0)]), "Fire Resist -30%");
        assert_eq!(format_positional("%+d", &[Arg::Num(0.0)]), "+0");
    }

    #[test]
    fn numbered_placeholders_fill_left_to_right() {
        assert_eq!(
            format_positional("%1 then %0", &["a".into(), "b".into()]),
            "a then b"
        );
    }

    #[test]
    fn missing_args_leave_placeholders() {
        assert_eq!(format_positional("%d/%d", &[Arg::Num(1.0)]), "1/%d");
    }

    #[test]
    fn signed_placeholder_ranges() {
        assert_eq!(
            format_positional("Fire Resist %+d%%", &[range_arg(20.0, 30.0)]),
            "Fire Resist +[20-30]%"
        );
        assert_eq!(
            format_positional("Fire Resist %+d%%", &[range_arg(-10.0, 30.0)]),
            "Fire Resist [-10 to 30]%"
        );
        assert_eq!(format_positional("Adds %d-%d", &[range_arg(1.0, 2.0), Arg::Num(4.0)]), "Adds [1-2]-4");
    }

    #[test]
    fn text_args_ignore_sign() {
        assert_eq!(format_positional("%+d%%", &["[5-10]".into()]), "[5-10]%");
    }

    #[test]
    fn placeholder_detection() {
        assert!(has_placeholders("Level %d %s Aura When Equipped"));
        assert!(!has_placeholders("100%% sure"));
        assert!(!has_placeholders("to Strength"));
        assert!(!has_placeholders("50% off"));
    }

    #[test]
    fn non_ascii_text_survives() {
        assert_eq!(format_positional("zu Stärke %d", &[Arg::Num(2.0)]), "zu Stärke 2");
    }
}
