//! Presentation input events.
//!
//! # Responsibility
//! - Translate keyboard keys and button actions into engine events.
//! - Keep key/button vocabulary out of the engine itself.
//!
//! # Invariants
//! - Each event maps to exactly one engine operation.
//! - Unrecognized keys are ignored; unrecognized button actions are errors.

use crate::model::operator::Operator;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type InputResult<T> = Result<T, InputError>;

/// Error for button actions outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    UnknownAction(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(action) => write!(f, "unknown button action `{action}`"),
        }
    }
}

impl Error for InputError {}

/// One discrete input handled by the calculator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Always an ASCII digit when produced by this module.
    Digit(char),
    Decimal,
    Operator(Operator),
    Calculate,
    Clear,
    Backspace,
    /// Immediate unary percentage of the current operand.
    Percentage,
}

impl InputEvent {
    /// Maps a keyboard key name (as reported by the host) to an event.
    ///
    /// `%` is the immediate percentage, not the chained operator.
    pub fn from_key(key: &str) -> Option<Self> {
        let event = match key {
            "." => Self::Decimal,
            "Enter" | "=" => Self::Calculate,
            "Backspace" => Self::Backspace,
            "Escape" => Self::Clear,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "%" => Self::Percentage,
            other => return single_digit(other).map(Self::Digit),
        };
        Some(event)
    }

    /// Maps an on-screen button to an event.
    ///
    /// `action` is the button's action name; digit buttons pass the digit.
    pub fn from_button(action: &str) -> InputResult<Self> {
        let event = match action {
            "decimal" => Self::Decimal,
            "clear" => Self::Clear,
            "backspace" => Self::Backspace,
            "percentage" => Self::Percentage,
            "calculate" => Self::Calculate,
            other => {
                if let Some(digit) = single_digit(other) {
                    Self::Digit(digit)
                } else if let Some(operator) = Operator::from_action(other) {
                    Self::Operator(operator)
                } else {
                    return Err(InputError::UnknownAction(other.to_string()));
                }
            }
        };
        Ok(event)
    }
}

fn single_digit(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_digit() => Some(ch),
        _ => None,
    }
}
