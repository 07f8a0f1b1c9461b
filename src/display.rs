//! Two-line display model built from the calculator state.

use serde::Serialize;

use crate::calculator::CalculatorState;
use crate::config::DisplayConfig;

/// What the calculator screen shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Display {
    /// The pending expression ("12 +"), empty when nothing is pending.
    pub secondary: String,
    /// The current operand, digit-grouped.
    pub primary: String,
    /// Whether the primary line is long enough to need the smaller font.
    pub compact: bool,
    /// The raw current operand, for the clipboard.
    pub raw: String,
}

impl Display {
    pub fn from_state(state: &CalculatorState, config: &DisplayConfig) -> Self {
        let separator = config.group_separator.as_str();

        let secondary = match (state.previous_operand.is_empty(), state.operation) {
            (true, _) => String::new(),
            (false, Some(op)) => format!(
                "{} {}",
                format_operand(&state.previous_operand, separator),
                op.symbol()
            ),
            (false, None) => format_operand(&state.previous_operand, separator),
        };

        Self {
            secondary,
            primary: format_operand(&state.current_operand, separator),
            compact: state.current_operand.chars().count() > config.compact_threshold,
            raw: state.current_operand.clone(),
        }
    }
}

/// Format an operand for display, grouping the integer digits.
///
/// The fraction part is kept verbatim, including a trailing point. Text that
/// is not a plain decimal literal (the error marker, `Infinity`, exponent
/// forms) is returned unchanged.
pub fn format_operand(operand: &str, separator: &str) -> String {
    if operand.is_empty() || operand == "-" {
        return operand.to_string();
    }

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let (negative, digits) = match integer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, integer),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return operand.to_string();
    }

    let mut formatted = String::new();
    if negative {
        formatted.push('-');
    }
    formatted.push_str(&format_with_separators(digits, separator));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

/// Group a string of decimal digits in threes.
fn format_with_separators(digits: &str, separator: &str) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let mut result = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    fn config() -> DisplayConfig {
        DisplayConfig {
            group_separator: ",".to_string(),
            compact_threshold: 8,
        }
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_operand("1000000", ","), "1,000,000");
        assert_eq!(format_operand("123", ","), "123");
        assert_eq!(format_operand("1234", ","), "1,234");
        assert_eq!(format_operand("-12345", ","), "-12,345");
        assert_eq!(format_operand("1234", "\u{a0}"), "1\u{a0}234");
    }

    #[test]
    fn test_fraction_kept_verbatim() {
        assert_eq!(format_operand("1234.5000", ","), "1,234.5000");
        assert_eq!(format_operand("12.", ","), "12.");
        assert_eq!(format_operand(".", ","), "0.");
        assert_eq!(format_operand("0.05", ","), "0.05");
    }

    #[test]
    fn test_special_operands_verbatim() {
        assert_eq!(format_operand("", ","), "");
        assert_eq!(format_operand("-", ","), "-");
        assert_eq!(format_operand("Error", ","), "Error");
        assert_eq!(format_operand("Error1", ","), "Error1");
        assert_eq!(format_operand("Infinity", ","), "Infinity");
        assert_eq!(format_operand("1e+21", ","), "1e+21");
    }

    #[test]
    fn test_display_lines() {
        let state = CalculatorState {
            current_operand: "3".to_string(),
            previous_operand: "12000".to_string(),
            operation: Some(Operator::Add),
            overwrite: false,
        };
        let display = Display::from_state(&state, &config());
        assert_eq!(display.secondary, "12,000 +");
        assert_eq!(display.primary, "3");
        assert_eq!(display.raw, "3");
        assert!(!display.compact);

        let display = Display::from_state(&CalculatorState::new(), &config());
        assert_eq!(display.secondary, "");
        assert_eq!(display.primary, "0");
    }

    #[test]
    fn test_compact_threshold() {
        let state = CalculatorState {
            current_operand: "123456789".to_string(),
            ..CalculatorState::new()
        };
        let display = Display::from_state(&state, &config());
        assert!(display.compact);
        assert_eq!(display.primary, "123,456,789");
        assert_eq!(display.raw, "123456789");
    }
}
