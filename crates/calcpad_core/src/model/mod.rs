//! Calculator domain model.
//!
//! # Responsibility
//! - Define the closed operator set and its display glyphs.
//! - Define immutable history records and the display projection.
//!
//! # Invariants
//! - Every operator has exactly one display symbol (exhaustive `match`).
//! - History entries are never mutated after construction.

pub mod display;
pub mod history_entry;
pub mod operator;
pub mod theme;
