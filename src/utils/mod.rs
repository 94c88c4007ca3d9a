//! Shared helpers for the generators.

pub mod path;
pub mod text;
