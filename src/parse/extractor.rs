//! Built-in extractors.

use std::collections::HashSet;

use log::debug;

use super::clean::clean_paths;
use super::html::{extract_inline_script_bodies, extract_script_sources};
use super::js::{extract_endpoints, is_static_asset};
use super::Extractor;

/// Built-in extractor: LinkFinder-style pattern matching over script bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtractor;

impl Extractor for DefaultExtractor {
    fn extract_scripts(&self, html: &[u8]) -> Vec<String> {
        let scripts = extract_script_sources(&String::from_utf8_lossy(html));
        debug!("Found {} script tags", scripts.len());
        scripts
    }

    fn extract_inline_scripts(&self, html: &[u8]) -> Vec<String> {
        extract_inline_script_bodies(&String::from_utf8_lossy(html))
    }

    fn extract_urls_from_js(&self, js: &[u8]) -> Vec<String> {
        extract_endpoints(&String::from_utf8_lossy(js))
    }

    fn clean(&self, paths: &HashSet<String>) -> Vec<String> {
        let cleaned = clean_paths(paths);
        debug!("{} unique paths after cleaning", cleaned.len());
        cleaned
    }
}

/// Like [`DefaultExtractor`], but drops images, fonts, stylesheets, media
/// files and source maps from what it extracts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointExtractor;

impl Extractor for EndpointExtractor {
    fn extract_scripts(&self, html: &[u8]) -> Vec<String> {
        DefaultExtractor.extract_scripts(html)
    }

    fn extract_inline_scripts(&self, html: &[u8]) -> Vec<String> {
        DefaultExtractor.extract_inline_scripts(html)
    }

    fn extract_urls_from_js(&self, js: &[u8]) -> Vec<String> {
        DefaultExtractor
            .extract_urls_from_js(js)
            .into_iter()
            .filter(|path| !is_static_asset(path))
            .collect()
    }

    fn clean(&self, paths: &HashSet<String>) -> Vec<String> {
        DefaultExtractor.clean(paths)
    }
}
