//! Completed-calculation record.
//!
//! # Invariants
//! - `expression` is `"<previous> <symbol> <current>"` at evaluation time.
//! - Fields are private; an entry cannot change once recorded.

use crate::model::operator::Operator;
use serde::{Deserialize, Serialize};

/// One completed calculation shown in the history panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    result: String,
}

impl HistoryEntry {
    /// Builds an entry from raw expression/result text.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// Builds an entry from the operands exactly as they were displayed.
    pub fn from_operands(
        previous: &str,
        operator: Operator,
        current: &str,
        result: impl Into<String>,
    ) -> Self {
        Self::new(
            format!("{previous} {} {current}", operator.symbol()),
            result,
        )
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}
