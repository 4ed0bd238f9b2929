use std::collections::{BTreeSet, HashSet};

/// Trims, drops empty entries, deduplicates and sorts ascending.
///
/// Two entries that differ only by surrounding whitespace collapse into one.
pub fn clean_paths(paths: &HashSet<String>) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.trim())
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
