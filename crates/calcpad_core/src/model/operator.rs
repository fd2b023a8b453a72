//! Binary operator model.
//!
//! # Responsibility
//! - Enumerate the operators the engine can hold as pending.
//! - Map each operator to its display glyph and arithmetic.
//!
//! # Invariants
//! - `symbol()` and `apply()` are total over the enum; adding a variant is a
//!   compile error until both are extended.

use serde::{Deserialize, Serialize};

/// Pending binary operation held by the engine between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Chained percentage: `lhs * (rhs / 100)`.
    Percentage,
}

impl Operator {
    /// All operators in button order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Percentage,
    ];

    /// Display glyph used on the expression line and in history text.
    ///
    /// `Subtract` uses U+2212 MINUS SIGN, not ASCII hyphen.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{00d7}",
            Operator::Divide => "\u{00f7}",
            Operator::Percentage => "%",
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN; no special casing.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Percentage => lhs * (rhs / 100.0),
        }
    }

    /// Stable action name, shared by button wiring and serde.
    pub fn as_action(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Percentage => "percentage",
        }
    }

    /// Parses a button action name. Case-sensitive, no trimming.
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.as_action() == action)
    }
}
