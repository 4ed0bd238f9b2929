//! Application I/O around the pipeline.
//!
//! This module provides target input and URL handling, result output, and
//! statistics printing.

pub mod input;
pub mod output;
pub mod statistics;
pub mod url;

// Re-export public API
pub use input::read_targets;
pub use output::{append_results, print_results};
pub use statistics::{print_failure_statistics, print_run_summary};
pub use url::{resolve_script_url, validate_and_normalize_url};
