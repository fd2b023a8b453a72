//! Calculator input-accumulation state machine.
//!
//! # Responsibility
//! - Accumulate operand text from digit/decimal input.
//! - Hold one pending binary operation and fold it left-to-right.
//! - Record every successful evaluation in the owned history ledger.
//!
//! # Invariants
//! - `current` is a decimal literal in progress; raw input never inserts `-`.
//! - A pending operator exists iff `previous` is non-empty.
//! - `reset_on_input` is set by choosing an operator or completing a
//!   calculation and consumed by the next digit/decimal input.
//! - No operation fails; degenerate input is a no-op or a non-finite result.

mod calculator;

pub use calculator::Calculator;
