//! CLI command implementations

pub mod discover;
