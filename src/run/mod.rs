//! Discovery run: targets in, cleaned endpoint list out.

mod pipeline;
mod results;
mod task;

use std::collections::HashSet;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::app::{print_failure_statistics, print_run_summary, read_targets};
use crate::capability::{load_capabilities, CapabilityRegistry};
use crate::config::Config;

pub use pipeline::{Pipeline, TargetOutcome, TargetState};
pub use results::ResultSet;

/// Results of a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    /// One outcome per target, in input order
    pub targets: Vec<TargetOutcome>,
    /// All targets' paths merged and cleaned
    pub paths: Vec<String>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a discovery with the built-in capability registry.
///
/// See [`run_discovery_with`].
///
/// # Example
///
/// ```no_run
/// use api_finder::{run_discovery, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     url: Some("https://example.com".to_string()),
///     ..Default::default()
/// };
/// let report = run_discovery(config).await?;
/// for path in &report.paths {
///     println!("{path}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn run_discovery(config: Config) -> Result<DiscoveryReport> {
    run_discovery_with(config, &CapabilityRegistry::with_builtins()).await
}

/// Runs a discovery, resolving custom capabilities from `registry`.
///
/// Targets are processed one after another through a single pipeline, so the
/// worker pool is shared by all of them. Per-target failures never abort the
/// run; they show up as targets with fewer (or no) paths.
///
/// # Errors
///
/// Only configuration and initialization problems are errors:
/// - invalid `Config` (see [`Config::validate`])
/// - unreadable input file, or no valid target in it
/// - the default HTTP client cannot be built
pub async fn run_discovery_with(
    config: Config,
    registry: &CapabilityRegistry,
) -> Result<DiscoveryReport> {
    config.validate()?;
    let start = Instant::now();

    let targets = read_targets(&config).await?;
    let capabilities =
        load_capabilities(registry, &config).context("Failed to initialize capabilities")?;
    let pipeline = Pipeline::new(capabilities, config.workers, config.verify_ssl);

    let mut outcomes = Vec::with_capacity(targets.len());
    let mut merged = HashSet::new();
    for target in &targets {
        info!("Processing target: {target}");
        let outcome = pipeline.process_target(target).await;
        merged.extend(outcome.paths.iter().cloned());
        outcomes.push(outcome);
    }

    let paths = pipeline.clean("all targets", &merged);
    print_failure_statistics(pipeline.stats());

    let report = DiscoveryReport {
        targets: outcomes,
        paths,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    };
    print_run_summary(&report);
    Ok(report)
}

#[cfg(test)]
mod tests;
