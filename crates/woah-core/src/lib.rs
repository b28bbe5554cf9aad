//! Core logic for woah.
//!
//! Resolves the platform data home and parses template repository
//! references. The only I/O performed here is reading process environment
//! variables.

/// Directory name appended to the platform data home.
pub const APP_DIR: &str = "woah";

/// Relative path returned when no environment variable yields a base path.
/// It is returned as-is, without the [`APP_DIR`] suffix.
pub const FALLBACK_DIR: &str = "./.woah";

pub mod data_home;
pub mod repository;
