//! Shared utilities for woah.
//!
//! Holds the error type used by the core library and the CLI.

pub mod errors;
