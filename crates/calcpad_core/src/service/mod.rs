//! Preference use-case services.
//!
//! # Responsibility
//! - Expose typed preferences over the opaque key-value repository.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod theme_service;
