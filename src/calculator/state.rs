//! Calculator state and the values it is built from.

use serde::Serialize;

use crate::error::{Error, Result};

/// Marker stored as the current operand after a division by zero.
pub const ERROR_MARKER: &str = "Error";

/// Operands longer than this stop accepting digits.
pub const MAX_OPERAND_LEN: usize = 12;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// ASCII symbol shown on the pending-expression line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Glyph printed on the keypad button.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// A single keypad digit: `0`..`9` or the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');
    pub const ZERO: Digit = Digit('0');

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Self(c))
        } else {
            Err(Error::InvalidDigit(c))
        }
    }
}

/// The whole interaction state of one calculator session.
///
/// Operands are kept as text and only parsed when an operation is evaluated,
/// so in-progress input such as `"0."` or `"12."` survives unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub current_operand: String,
    pub previous_operand: String,
    pub operation: Option<Operator>,
    pub overwrite: bool,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            operation: None,
            overwrite: false,
        }
    }

    /// Whether the current operand holds the division-by-zero marker.
    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_MARKER
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
