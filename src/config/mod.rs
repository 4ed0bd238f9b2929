//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, limits, built-in capability names)
//! - The library `Config` and its validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Cli;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
