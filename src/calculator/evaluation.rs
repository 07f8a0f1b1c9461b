//! Operand parsing, evaluation and result formatting.
//!
//! Operands arrive as the text typed on the keypad. They are parsed with
//! leading-prefix semantics (trailing garbage is ignored) and results are
//! turned back into the shortest decimal text that round-trips.

use lazy_static::lazy_static;
use regex::Regex;

use super::state::{ERROR_MARKER, Operator};

lazy_static! {
    /// Longest numeric prefix of an operand.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^\s*([+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))"
    ).unwrap();
}

/// Parse the numeric prefix of an operand.
///
/// Returns `None` when the text does not start with a number, e.g. `"."`,
/// `""` or the error marker.
pub fn parse_operand(text: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX.captures(text)?.get(1)?.as_str();
    prefix.parse::<f64>().ok()
}

/// Evaluate `previous <operation> current`.
///
/// Returns an empty string when either operand fails to parse and the error
/// marker when dividing by zero. With no operation pending the computed value
/// is zero.
pub fn evaluate(previous: &str, operation: Option<Operator>, current: &str) -> String {
    let (Some(lhs), Some(rhs)) = (parse_operand(previous), parse_operand(current)) else {
        return String::new();
    };

    let value = match operation {
        Some(Operator::Divide) if rhs == 0.0 => return ERROR_MARKER.to_string(),
        Some(op) => op.apply(lhs, rhs),
        None => 0.0,
    };

    format_number(value)
}

/// Format a number as the shortest decimal text that round-trips.
///
/// Plain notation is used while the decimal exponent stays within
/// `[-7, 21)`, scientific notation (`1e+21`, `1.5e-7`) outside it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, e.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_operands() {
        assert_eq!(parse_operand("0"), Some(0.0));
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("0.05"), Some(0.05));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("-3"), Some(-3.0));
    }

    #[test]
    fn test_parse_uses_numeric_prefix() {
        assert_eq!(parse_operand("12abc"), Some(12.0));
        assert_eq!(parse_operand("  7"), Some(7.0));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
        assert_eq!(parse_operand("2e"), Some(2.0));
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("Error"), None);
        assert_eq!(parse_operand("Error5"), None);
        assert_eq!(parse_operand("-"), None);
    }

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(evaluate("5", Some(Operator::Add), "3"), "8");
        assert_eq!(evaluate("2", Some(Operator::Subtract), "5"), "-3");
        assert_eq!(evaluate("5", Some(Operator::Multiply), "4"), "20");
        assert_eq!(evaluate("1", Some(Operator::Divide), "4"), "0.25");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("6", Some(Operator::Divide), "0"), ERROR_MARKER);
        assert_eq!(evaluate("0", Some(Operator::Divide), "0"), ERROR_MARKER);
        assert_eq!(evaluate("-2.5", Some(Operator::Divide), "0."), ERROR_MARKER);
        assert_eq!(evaluate("1e+21", Some(Operator::Divide), "0.000"), ERROR_MARKER);
    }

    #[test]
    fn test_unparseable_operand() {
        assert_eq!(evaluate("", Some(Operator::Add), "3"), "");
        assert_eq!(evaluate("5", Some(Operator::Add), "."), "");
        assert_eq!(evaluate("Error", Some(Operator::Divide), "0"), "");
    }

    #[test]
    fn test_no_operation_yields_zero() {
        assert_eq!(evaluate("5", None, "3"), "0");
    }

    #[test]
    fn test_floating_point_is_not_rounded() {
        assert_eq!(evaluate("0.1", Some(Operator::Add), "0.2"), "0.30000000000000004");
        assert_eq!(evaluate("1", Some(Operator::Divide), "3"), "0.3333333333333333");
    }

    #[test]
    fn test_format_integers_and_fractions() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e-9), "-2e-9");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
