//! Extractor capability: script references, endpoint literals and cleaning.
//!
//! Extraction is best-effort pattern matching:
//! - script references come from `<script src>` attributes (via `scraper`,
//!   which tolerates malformed HTML)
//! - endpoints come from quoted string literals matched by a regex; no
//!   JavaScript is parsed or executed
//! - cleaning trims, deduplicates and sorts

mod clean;
mod extractor;
mod html;
mod js;

use std::collections::HashSet;

use crate::error_handling::CapabilityError;

// Re-export public API
pub use clean::clean_paths;
pub use extractor::{DefaultExtractor, EndpointExtractor};
pub use html::{extract_inline_script_bodies, extract_script_sources};
pub use js::{extract_endpoints, is_static_asset};

/// Extracts script references and endpoint candidates.
///
/// Operations share no state between calls. Implementations are shared across
/// worker tasks as `Arc<dyn Extractor>`.
pub trait Extractor: Send + Sync {
    /// Script `src` values found in an HTML document, relative or absolute.
    ///
    /// Must return an empty list rather than fail on unparsable input.
    fn extract_scripts(&self, html: &[u8]) -> Vec<String>;

    /// Bodies of inline `<script>` tags. The pipeline scans each one with
    /// [`Extractor::extract_urls_from_js`].
    fn extract_inline_scripts(&self, _html: &[u8]) -> Vec<String> {
        Vec::new()
    }

    /// URL- and path-like literals in a script body. Duplicates are allowed.
    fn extract_urls_from_js(&self, js: &[u8]) -> Vec<String>;

    /// Turns an aggregated set into the final output: no empty entries, no
    /// duplicates, ascending order. Must be a pure function of its input.
    fn clean(&self, paths: &HashSet<String>) -> Vec<String>;

    /// Conformance hook run by the capability loader right after instantiation.
    fn self_check(&self) -> Result<(), CapabilityError> {
        Ok(())
    }
}
