//! Command-line options.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes
/// and converted into a library [`Config`] before the run starts.
///
/// # Examples
///
/// ```bash
/// # Single target
/// api_finder -u https://example.com
///
/// # Batch of targets, 20 workers, results appended to a file
/// api_finder -f targets.txt -w 20 -o endpoints.txt
///
/// # Built-in extractor that drops static assets
/// api_finder -u https://example.com --custom-module builtin --parsed-name EndpointExtractor
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "api_finder",
    about = "Harvests candidate API endpoints from the scripts a web page loads.",
    group(ArgGroup::new("input").required(true).args(["url", "file"]))
)]
pub struct Cli {
    /// Target URL
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// File with one target URL per line
    #[arg(short = 'f', long, value_parser)]
    pub file: Option<PathBuf>,

    /// Registry module holding custom capabilities
    #[arg(long, alias = "cm")]
    pub custom_module: Option<String>,

    /// Type name of a custom extractor
    #[arg(long, alias = "pn")]
    pub parsed_name: Option<String>,

    /// Type name of a custom requester
    #[arg(long, alias = "rn")]
    pub request_name: Option<String>,

    /// Maximum concurrent script fetches
    #[arg(short = 'w', long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Verify TLS certificates (disabled by default)
    #[arg(long)]
    pub ssl: bool,

    /// Append discovered paths to this file, one per line
    #[arg(short = 'o', long, value_parser)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            url: cli.url,
            file: cli.file,
            custom_module: cli.custom_module,
            parsed_name: cli.parsed_name,
            request_name: cli.request_name,
            workers: cli.workers,
            verify_ssl: cli.ssl,
            output: cli.output,
            timeout_seconds: cli.timeout_seconds,
            user_agent: cli.user_agent,
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }
}
