//! Pattern-based endpoint extraction from JavaScript (does NOT parse or execute it).

use regex::Regex;
use std::sync::LazyLock;

/// Quoted string literals that look like URLs or endpoint paths.
///
/// Alternatives, in order:
/// 1. absolute or protocol-relative URLs with any host, including `localhost`,
///    IP addresses and single-label names, with an optional port
/// 2. paths starting with `/`, `./` or `../`
/// 3. relative `dir/file.ext` paths, with optional query string
/// 4. bare file names with a server-side or data extension
const ENDPOINT_PATTERN: &str = concat!(
    r#"(?:"|')"#,
    r#"("#,
    r#"(?:(?:https?:)?//[^"'/\s]+[^"'\s]*)"#,
    r#"|"#,
    r#"(?:(?:/|\.\./|\./)[^"'><,;| *()(%$^/\\\[\]][^"'><,;|()]+)"#,
    r#"|"#,
    r#"(?:[a-zA-Z0-9_\-/]+/[a-zA-Z0-9_\-/]+\.(?:[a-zA-Z]{1,4}|action)(?:[\?/][^"']*)?)"#,
    r#"|"#,
    r#"(?:[a-zA-Z0-9_\-]+\.(?:php|asp|aspx|jsp|json|action|html|js|txt|xml)(?:\?[^"']*)?)"#,
    r#")"#,
    r#"(?:"|')"#,
);

static ENDPOINT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ENDPOINT_PATTERN).expect("Failed to compile endpoint regex - this is a bug")
});

/// File extensions of static assets that are never API endpoints.
const STATIC_ASSET_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "bmp", "css", "woff", "woff2", "ttf",
    "eot", "otf", "mp3", "mp4", "webm", "avi", "map",
];

/// Returns every endpoint-like literal in `text`, in order of appearance.
///
/// Duplicates are kept; deduplication happens when results are cleaned.
pub fn extract_endpoints(text: &str) -> Vec<String> {
    ENDPOINT_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `path` points at an image, font, stylesheet, media file or source map.
///
/// Query strings and fragments are ignored when looking at the extension.
pub fn is_static_asset(path: &str) -> bool {
    let without_query = path.split(['?', '#']).next().unwrap_or(path);
    let file_name = without_query.rsplit('/').next().unwrap_or(without_query);
    match file_name.rsplit_once('.') {
        Some((_, ext)) => STATIC_ASSET_EXTENSIONS
            .iter()
            .any(|asset| asset.eq_ignore_ascii_case(ext)),
        None => false,
    }
}
