//! URL validation, normalization and script reference resolution.

use log::{debug, warn};
use url::Url;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a target URL.
///
/// Adds https:// prefix if missing, then validates that the URL is syntactically
/// valid and uses http/https scheme. Rejects URLs longer than `MAX_URL_LENGTH`.
/// Logs a warning and returns None if the URL is invalid, too long, or uses an
/// unsupported scheme.
///
/// # Returns
///
/// `Some(normalized_url)` if the URL is valid and should be processed, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Skipping unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

/// Resolves a script reference against the page it was found on.
///
/// Relative, root-relative, protocol-relative and absolute references are all
/// handled by `Url::join`. References that don't resolve to an http(s) URL
/// (`data:`, `javascript:`, garbage) are dropped.
pub fn resolve_script_url(base: &Url, reference: &str) -> Option<Url> {
    match base.join(reference.trim()) {
        Ok(resolved) if matches!(resolved.scheme(), "http" | "https") => Some(resolved),
        Ok(resolved) => {
            debug!("Skipping script with unsupported scheme: {resolved}");
            None
        }
        Err(e) => {
            debug!("Skipping unresolvable script reference {reference:?}: {e}");
            None
        }
    }
}
