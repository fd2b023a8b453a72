//! Repository layer for host-persisted preferences.
//!
//! # Responsibility
//! - Define the opaque key-value contract the host persists.
//! - Keep SQL details inside the persistence boundary.

pub mod preference_repo;
