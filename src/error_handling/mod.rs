//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, capability loading)
//! - Fetch failure categorization from `reqwest` errors
//! - Processing statistics tracking
//!
//! Only `ConfigError` and `InitializationError` abort a run. Fetch failures,
//! capability-load failures and task failures are absorbed where they happen.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{CapabilityError, ConfigError, FetchFailure, InitializationError};
