//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use api_finder::Config;
///
/// let config = Config {
///     url: Some("https://example.com".to_string()),
///     workers: 20,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Single target URL
    pub url: Option<String>,

    /// File with one target URL per line
    pub file: Option<PathBuf>,

    /// Registry module to load custom capabilities from
    pub custom_module: Option<String>,

    /// Type name of a custom extractor
    pub parsed_name: Option<String>,

    /// Type name of a custom requester
    pub request_name: Option<String>,

    /// Maximum concurrent script fetches
    pub workers: usize,

    /// Verify TLS certificates (off by default)
    pub verify_ssl: bool,

    /// File the discovered paths are appended to
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            file: None,
            custom_module: None,
            parsed_name: None,
            request_name: None,
            workers: DEFAULT_WORKERS,
            verify_ssl: false,
            output: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the configuration before any network activity starts.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if no input (or both inputs) is given, the worker
    /// count is zero, or a custom module is named without any type name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.url, &self.file) {
            (None, None) => return Err(ConfigError::MissingInput),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingInput),
            _ => {}
        }

        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers(self.workers));
        }

        if let Some(module) = &self.custom_module {
            if self.parsed_name.is_none() && self.request_name.is_none() {
                return Err(ConfigError::ModuleWithoutTypeNames(module.clone()));
            }
        }

        Ok(())
    }
}
