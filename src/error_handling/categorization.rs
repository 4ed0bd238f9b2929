//! Error categorization.
//!
//! Maps transport and status errors from `reqwest` onto `FetchFailure`.

use super::types::FetchFailure;

/// Categorizes a `reqwest::Error` into a `FetchFailure`.
///
/// Status errors (from `error_for_status`) are checked first, then the
/// transport-level error kinds.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchFailure {
    if let Some(status) = error.status() {
        match status.as_u16() {
            403 => return FetchFailure::Forbidden,
            404 => return FetchFailure::NotFound,
            _ if status.is_client_error() => return FetchFailure::ClientError,
            _ if status.is_server_error() => return FetchFailure::ServerError,
            _ => {
                // Non-standard status codes - fall through to check error type
            }
        }
    }

    if error.is_builder() {
        FetchFailure::InvalidUrl
    } else if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_redirect() {
        FetchFailure::Redirect
    } else if error.is_connect() {
        FetchFailure::Connect
    } else if error.is_body() {
        FetchFailure::Body
    } else if error.is_decode() {
        FetchFailure::Decode
    } else if error.is_request() {
        FetchFailure::Request
    } else {
        FetchFailure::Other
    }
}
