//! Target input: a single URL or a file of URLs.

use anyhow::{Context, Result};
use log::info;

use super::url::validate_and_normalize_url;
use crate::config::Config;
use crate::error_handling::ConfigError;

/// Reads the targets named by `config`, normalized and in input order.
///
/// File input skips blank lines and `#` comments; invalid URLs are logged and
/// skipped.
///
/// # Errors
///
/// Fails if the input file cannot be read, or if no valid target remains.
pub async fn read_targets(config: &Config) -> Result<Vec<String>> {
    let raw: Vec<String> = match (&config.url, &config.file) {
        (Some(url), _) => vec![url.clone()],
        (None, Some(path)) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            let lines = parse_target_lines(&content);
            info!("Total URLs in file: {}", lines.len());
            lines
        }
        (None, None) => return Err(ConfigError::MissingInput.into()),
    };

    let targets: Vec<String> = raw
        .iter()
        .filter_map(|line| validate_and_normalize_url(line))
        .collect();

    if targets.is_empty() {
        return Err(ConfigError::NoTargets.into());
    }
    Ok(targets)
}

/// Non-empty, non-comment lines, trimmed.
pub fn parse_target_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
