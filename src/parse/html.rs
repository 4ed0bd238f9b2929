use scraper::{Html, Selector};
use std::sync::LazyLock;

// CSS selector strings
const SCRIPT_SRC_SELECTOR_STR: &str = "script[src]";
const INLINE_SCRIPT_SELECTOR_STR: &str = "script:not([src])";

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SCRIPT_SRC_SELECTOR_STR)
        .expect("Failed to parse script src selector - this is a bug")
});

static INLINE_SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(INLINE_SCRIPT_SELECTOR_STR)
        .expect("Failed to parse inline script selector - this is a bug")
});

/// Extracts the `src` attribute of every `<script>` tag.
///
/// html5ever recovers from malformed markup the way browsers do, so partial or
/// broken documents still yield whatever script tags can be recovered. Values
/// are trimmed; empty ones are dropped.
pub fn extract_script_sources(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&SCRIPT_SRC_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the bodies of `<script>` tags that have no `src` attribute.
pub fn extract_inline_script_bodies(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&INLINE_SCRIPT_SELECTOR)
        .map(|element| element.text().collect::<String>())
        .filter(|body| !body.trim().is_empty())
        .collect()
}
