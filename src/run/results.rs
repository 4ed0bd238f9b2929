//! Per-target result aggregation.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Set of extracted paths for one target, shared by its script tasks.
///
/// Every insertion goes through [`ResultSet::merge`], which holds the lock
/// for the whole batch. Empty strings are never stored.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl ResultSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every non-empty path, returning how many were new.
    pub fn merge<I>(&self, paths: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        // A task that panicked mid-merge leaves a valid set behind
        let mut set = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        paths
            .into_iter()
            .filter(|path| !path.is_empty())
            .map(|path| set.insert(path))
            .filter(|inserted| *inserted)
            .count()
    }

    /// Number of distinct paths collected so far.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no path has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> HashSet<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
