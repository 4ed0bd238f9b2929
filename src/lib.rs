//! api_finder library: candidate API endpoint discovery
//!
//! This library fetches a web page, follows every external script it loads
//! (concurrently, through a bounded worker pool), and harvests the URL and
//! path literals those scripts contain. The result is a deduplicated, sorted
//! list of candidate endpoints.
//!
//! Fetching and extraction are pluggable: register your own
//! [`Requester`](fetch::Requester) or [`Extractor`](parse::Extractor) in a
//! [`CapabilityRegistry`] and name it in the [`Config`]. A capability that
//! fails to load is replaced by the built-in default.
//!
//! # Example
//!
//! ```no_run
//! use api_finder::{run_discovery, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("https://example.com".to_string()),
//!     workers: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_discovery(config).await?;
//! println!("Found {} candidate endpoint(s)", report.paths.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod capability;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
mod run;

// Re-export public API
pub use capability::{Capabilities, CapabilityRegistry, FactoryContext};
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, CapabilityError, ConfigError, FetchFailure, InitializationError,
    ProcessingStats,
};
pub use fetch::{FetchResult, Requester};
pub use parse::Extractor;
pub use run::{
    run_discovery, run_discovery_with, DiscoveryReport, Pipeline, ResultSet, TargetOutcome,
    TargetState,
};
