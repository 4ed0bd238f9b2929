//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for fetch failures and task
//! failures recorded while targets are processed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FetchFailure;

/// Thread-safe processing statistics tracker.
///
/// Tracks fetch failures per category and task-level failures (panics caught
/// at the task boundary) using atomic counters, so script tasks can record
/// into the same tracker concurrently. All categories start at zero.
pub struct ProcessingStats {
    failures: HashMap<FetchFailure, AtomicUsize>,
    task_failures: AtomicUsize,
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in FetchFailure::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }

        ProcessingStats {
            failures,
            task_failures: AtomicUsize::new(0),
        }
    }

    /// Increment a fetch failure counter.
    pub fn increment_failure(&self, failure: FetchFailure) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                failure
            );
        }
    }

    /// Increment the counter of tasks that failed outside the requester.
    pub fn increment_task_failure(&self) {
        self.task_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the count for a failure category.
    pub fn get_failure_count(&self, failure: FetchFailure) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Tasks that failed outside the requester (panics, join errors).
    pub fn task_failures(&self) -> usize {
        self.task_failures.load(Ordering::SeqCst)
    }

    /// Total fetch failures across all categories.
    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
