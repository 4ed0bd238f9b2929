//! HTTP client initialization.
//!
//! This module provides the function that builds the `reqwest` clients used by
//! the default requester.

use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes an HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header
/// - Per-request timeout
/// - reqwest's default redirect policy (up to 10 hops)
/// - Certificate validation on or off, depending on `verify_ssl`
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(
    timeout: Duration,
    user_agent: &str,
    verify_ssl: bool,
) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent)
        .danger_accept_invalid_certs(!verify_ssl)
        .build()
}
