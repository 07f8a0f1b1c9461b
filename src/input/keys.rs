//! Mapping of key names and keypad labels onto calculator actions.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::{Action, Digit, Operator};
use crate::error::{Error, Result};

/// Keypad layout, row by row. The zero button spans two cells.
pub const KEYPAD: &[&[&str]] = &[
    &["AC", "⌫", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

lazy_static! {
    /// Splits a key sequence into whitespace, `<Named>` keys, `AC` and single characters.
    static ref KEY_TOKEN: Regex = Regex::new(r"\s+|<[^>]*>|AC|.").unwrap();
}

impl Action {
    /// Map a physical key name (as reported by a keyboard event) to an action.
    ///
    /// `Enter` and `=` both evaluate. Unknown keys yield `None`.
    pub fn from_key(name: &str) -> Option<Self> {
        let action: Self = match name {
            "+" => Operator::Add.into(),
            "-" => Operator::Subtract.into(),
            "*" => Operator::Multiply.into(),
            "/" => Operator::Divide.into(),
            "Enter" | "=" => Self::Equals,
            "Backspace" => Self::Delete,
            "Escape" => Self::Clear,
            "%" => Self::Percent,
            _ => return single_digit(name),
        };
        Some(action)
    }

    /// Map a keypad button label to an action.
    pub fn from_label(label: &str) -> Option<Self> {
        let action: Self = match label {
            "+" => Operator::Add.into(),
            "-" => Operator::Subtract.into(),
            "×" => Operator::Multiply.into(),
            "÷" => Operator::Divide.into(),
            "=" => Self::Equals,
            "AC" => Self::Clear,
            "⌫" => Self::Delete,
            "%" => Self::Percent,
            _ => return single_digit(label),
        };
        Some(action)
    }
}

fn single_digit(text: &str) -> Option<Action> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Digit::try_from(c).ok().map(Action::Digit)
}

/// Parse a key sequence such as `"12+3<Enter>"` into actions.
///
/// Named keys go in angle brackets (`<Enter>`, `<Backspace>`, `<Escape>`).
/// Keypad glyphs (`×`, `÷`, `⌫`, `AC`) are accepted as well. Whitespace is
/// ignored.
pub fn parse_keys(input: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    for token in KEY_TOKEN.find_iter(input).map(|m| m.as_str()) {
        if token.trim().is_empty() {
            continue;
        }

        let name = token
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(token);

        let action = Action::from_key(name)
            .or_else(|| Action::from_label(name))
            .ok_or_else(|| Error::UnknownKey(token.to_string()))?;
        actions.push(action);
    }

    Ok(actions)
}
