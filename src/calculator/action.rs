//! User actions understood by the engine.

use super::state::{Digit, Operator};

/// One keypad press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Digit(Digit),
    Operation(Operator),
    Clear,
    Delete,
    Percent,
    Equals,
}

impl Action {
    /// Label of the keypad button that triggers this action.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.as_char().to_string(),
            Self::Operation(op) => op.glyph().to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Percent => "%".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Action {
    fn from(op: Operator) -> Self {
        Self::Operation(op)
    }
}
