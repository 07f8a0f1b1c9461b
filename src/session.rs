//! A calculator session: one state value, updated input by input.

use crate::calculator::{Action, CalculatorState};
use crate::config::DisplayConfig;
use crate::display::Display;

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: CalculatorState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Apply one action and return the resulting state.
    pub fn apply(&mut self, action: Action) -> &CalculatorState {
        let next = self.state.apply(action);
        if next == self.state {
            tracing::trace!(?action, "no-op");
        } else {
            tracing::debug!(
                ?action,
                current = %next.current_operand,
                previous = %next.previous_operand,
                operation = ?next.operation,
                overwrite = next.overwrite,
                "transition"
            );
        }
        self.state = next;
        &self.state
    }

    /// Apply actions in the order given.
    pub fn apply_all<I>(&mut self, actions: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.apply(action);
        }
        &self.state
    }

    pub fn display(&self, config: &DisplayConfig) -> Display {
        Display::from_state(&self.state, config)
    }

    pub fn reset(&mut self) {
        self.state = CalculatorState::new();
    }
}
