//! Display-surface projection of engine state.

use crate::model::operator::Operator;

/// Text the presentation layer renders after every input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Main display line (the operand being edited or the last result).
    pub current: String,
    /// Secondary line: `previous` plus ` <symbol> ` while an operator is
    /// pending, otherwise `previous` alone (empty after a calculation).
    pub expression: String,
}

impl DisplayState {
    pub fn new(current: &str, previous: &str, pending: Option<Operator>) -> Self {
        let expression = match pending {
            Some(operator) => format!("{previous} {} ", operator.symbol()),
            None => previous.to_string(),
        };
        Self {
            current: current.to_string(),
            expression,
        }
    }
}
