use zcalc::input::parse_keys;
use zcalc::{CalculatorState, Digit, Session};

/// Runs a key sequence from a fresh session and returns the final state.
pub fn press(keys: &str) -> CalculatorState {
    let mut session = Session::new();
    session.apply_all(parse_keys(keys).expect("valid key sequence"));
    session.state().clone()
}

/// Creates a digit from a character.
#[allow(dead_code)]
pub fn digit(c: char) -> Digit {
    Digit::try_from(c).expect("valid digit")
}

/// Creates a state with the given current operand and nothing pending.
#[allow(dead_code)]
pub fn entering(current: &str) -> CalculatorState {
    CalculatorState {
        current_operand: current.to_string(),
        ..CalculatorState::new()
    }
}
