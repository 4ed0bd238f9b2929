//! Configuration constants.
//!
//! This module defines the defaults shared by the library `Config` and the CLI,
//! plus the names under which built-in capabilities are registered.

/// Number of concurrent script fetches when `--workers` is not given.
pub const DEFAULT_WORKERS: usize = 10;

/// Per-request timeout in seconds for the default requester.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// A desktop Chrome string; some sites serve a stripped-down page (with fewer
/// script bundles) to clients that don't look like a browser.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

/// Maximum target URL length (2048 characters).
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Capability registry names
/// Module that holds the capabilities compiled into this crate.
pub const BUILTIN_MODULE: &str = "builtin";
/// Type name of the built-in requester.
pub const DEFAULT_REQUESTER_NAME: &str = "DefaultRequester";
/// Type name of the built-in extractor.
pub const DEFAULT_EXTRACTOR_NAME: &str = "DefaultExtractor";
/// Type name of the built-in extractor that drops static assets.
pub const ENDPOINT_EXTRACTOR_NAME: &str = "EndpointExtractor";
