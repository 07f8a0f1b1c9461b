//! zcalc: a keypad calculator engine.
//!
//! The engine keeps operands as text and applies one keypad action at a time.
//! Operations chain left to right without precedence.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod session;
pub mod ui;

pub use calculator::{Action, CalculatorState, Digit, Operator};
pub use config::Config;
pub use display::Display;
pub use error::{Error, Result};
pub use session::Session;
