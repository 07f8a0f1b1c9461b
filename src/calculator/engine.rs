//! State transitions.
//!
//! Every operation borrows the current state and returns the next one. A
//! no-op returns an equal copy.

use super::action::Action;
use super::evaluation::{evaluate, format_number, parse_operand};
use super::state::{CalculatorState, Digit, MAX_OPERAND_LEN, Operator};

impl CalculatorState {
    /// Apply a single action.
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::Digit(digit) => self.add_digit(digit),
            Action::Operation(op) => self.choose_operation(op),
            Action::Clear => self.clear(),
            Action::Delete => self.delete_digit(),
            Action::Percent => self.handle_percent(),
            Action::Equals => self.calculate_result(),
        }
    }

    pub fn add_digit(&self, digit: Digit) -> Self {
        let c = digit.as_char();

        if self.overwrite {
            return Self {
                current_operand: c.to_string(),
                overwrite: false,
                ..self.clone()
            };
        }
        if digit == Digit::ZERO && self.current_operand == "0" {
            return self.clone();
        }
        if digit.is_point() && self.current_operand.contains('.') {
            return self.clone();
        }
        if self.current_operand == "0" && !digit.is_point() {
            return Self {
                current_operand: c.to_string(),
                ..self.clone()
            };
        }
        if self.current_operand.chars().count() > MAX_OPERAND_LEN {
            return self.clone();
        }

        let mut current_operand = self.current_operand.clone();
        current_operand.push(c);
        Self {
            current_operand,
            ..self.clone()
        }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn delete_digit(&self) -> Self {
        if self.overwrite {
            return Self {
                current_operand: "0".to_string(),
                overwrite: false,
                ..self.clone()
            };
        }
        if self.current_operand.chars().count() == 1 {
            return Self {
                current_operand: "0".to_string(),
                ..self.clone()
            };
        }

        let mut current_operand = self.current_operand.clone();
        current_operand.pop();
        Self {
            current_operand,
            ..self.clone()
        }
    }

    pub fn choose_operation(&self, op: Operator) -> Self {
        if self.is_error() {
            return Self::new();
        }
        if self.current_operand.is_empty() && self.previous_operand.is_empty() {
            return self.clone();
        }

        if !self.previous_operand.is_empty() {
            // Operator pressed again before a new operand: switch operators.
            if self.overwrite {
                return Self {
                    operation: Some(op),
                    ..self.clone()
                };
            }

            let result = evaluate(&self.previous_operand, self.operation, &self.current_operand);
            return Self {
                previous_operand: result.clone(),
                operation: Some(op),
                current_operand: result,
                overwrite: true,
            };
        }

        Self {
            previous_operand: self.current_operand.clone(),
            operation: Some(op),
            current_operand: self.current_operand.clone(),
            overwrite: true,
        }
    }

    pub fn calculate_result(&self) -> Self {
        if self.operation.is_none() || self.previous_operand.is_empty() {
            return self.clone();
        }

        Self {
            previous_operand: String::new(),
            operation: None,
            current_operand: evaluate(
                &self.previous_operand,
                self.operation,
                &self.current_operand,
            ),
            overwrite: true,
        }
    }

    /// Divide the current operand by 100, independent of any pending operation.
    pub fn handle_percent(&self) -> Self {
        let Some(value) = parse_operand(&self.current_operand) else {
            return self.clone();
        };

        Self {
            current_operand: format_number(value / 100.0),
            overwrite: true,
            ..self.clone()
        }
    }
}
