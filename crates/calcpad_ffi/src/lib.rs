//! Flutter-facing bridge for calcpad.

pub mod api;
