//! Calculator engine.
//!
//! This module provides functionality to:
//! - Hold the keypad interaction state
//! - Apply digits, operators, clear, delete, percent and equals to it
//! - Evaluate pending operations and format results
//! - Copy results to the clipboard

mod action;
mod clipboard;
mod engine;
mod evaluation;
mod state;

pub use action::Action;
pub use clipboard::copy_to_clipboard;
pub use evaluation::{evaluate, format_number, parse_operand};
pub use state::{CalculatorState, Digit, ERROR_MARKER, MAX_OPERAND_LEN, Operator};
