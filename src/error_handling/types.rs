//! Error type definitions.
//!
//! This module defines all error types used throughout the application, and the
//! fetch failure categories recorded when a request comes back absent.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid input configuration.
///
/// These are the only fatal errors: they are reported before any network
/// activity begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a URL nor a file was given.
    #[error("no target given: pass a URL (-u) or a file of URLs (-f)")]
    MissingInput,

    /// Both a URL and a file were given.
    #[error("a URL (-u) and a file of URLs (-f) cannot be combined")]
    ConflictingInput,

    /// Worker count must be positive.
    #[error("worker count must be a positive integer (got {0})")]
    InvalidWorkers(usize),

    /// A custom module was named without a requester or extractor type.
    #[error("custom module '{0}' given without --parsed-name or --request-name")]
    ModuleWithoutTypeNames(String),

    /// The input file contained no usable target URL.
    #[error("no valid target URL found in input")]
    NoTargets,
}

/// Failure to resolve a custom capability.
///
/// Never fatal: the loader logs it and falls back to the built-in default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// No module registered under this name.
    #[error("module '{0}' is not registered")]
    ModuleNotFound(String),

    /// The module exists but has no such type for the requested capability.
    #[error("module '{module}' has no {capability} named '{name}'")]
    TypeNotFound {
        /// Module searched
        module: String,
        /// Requested type name
        name: String,
        /// "requester" or "extractor"
        capability: &'static str,
    },

    /// The factory returned an error or panicked.
    #[error("failed to instantiate '{name}': {reason}")]
    Instantiation {
        /// Type name
        name: String,
        /// Factory error message
        reason: String,
    },

    /// The instance does not honor the capability's contract.
    #[error("'{name}' does not satisfy the {capability} contract: {reason}")]
    Conformance {
        /// Type name
        name: String,
        /// "requester" or "extractor"
        capability: &'static str,
        /// What the check observed
        reason: String,
    },
}

/// Why a fetch produced no payload.
///
/// Callers treat every variant the same way (skip the resource); the category
/// only feeds logging and the end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchFailure {
    /// URL could not be parsed
    InvalidUrl,
    /// Request exceeded the timeout
    Timeout,
    /// Connection or TLS handshake failed
    Connect,
    /// Redirect loop or too many redirects
    Redirect,
    // HTTP status errors
    /// 403 response
    Forbidden,
    /// 404 response
    NotFound,
    /// Any other 4xx response
    ClientError,
    /// 5xx response
    ServerError,
    // Response errors
    /// Body could not be read
    Body,
    /// Body could not be decoded
    Decode,
    /// Request could not be built or sent
    Request,
    /// Anything else
    Other,
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchFailure {
    /// Human-readable label used in logs and statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchFailure::InvalidUrl => "Invalid URL",
            FetchFailure::Timeout => "HTTP request timeout",
            FetchFailure::Connect => "HTTP connect error (includes TLS)",
            FetchFailure::Redirect => "HTTP redirect error",
            FetchFailure::Forbidden => "Forbidden (403)",
            FetchFailure::NotFound => "Not Found (404)",
            FetchFailure::ClientError => "Other client error (4xx)",
            FetchFailure::ServerError => "Server error (5xx)",
            FetchFailure::Body => "Response body error",
            FetchFailure::Decode => "Response decode error",
            FetchFailure::Request => "HTTP request error",
            FetchFailure::Other => "Other fetch error",
        }
    }
}
