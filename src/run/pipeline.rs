//! Per-target pipeline: page → script references → concurrent script fetches
//! → aggregated, cleaned paths.

use std::collections::HashSet;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, error, info, warn};
use tokio::sync::Semaphore;
use url::Url;

use super::results::ResultSet;
use super::task::{fetch_and_extract, ScriptOutcome, ScriptTaskParams};
use crate::app::resolve_script_url;
use crate::capability::Capabilities;
use crate::error_handling::ProcessingStats;
use crate::fetch::{FetchResult, Requester};
use crate::initialization::init_semaphore;
use crate::parse::Extractor;

/// Where a target is in its processing.
///
/// Every target reaches `Done`, including one whose page could not be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Requesting the target page
    FetchingPage,
    /// Collecting script references from the page
    ExtractingScripts,
    /// Handing script URLs to the worker pool
    DispatchingChildren,
    /// Waiting for every script task to finish
    AwaitingChildren,
    /// Deduplicating and sorting the collected paths
    Cleaning,
    /// Finished, successfully or not
    Done,
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetState::FetchingPage => "fetching page",
            TargetState::ExtractingScripts => "extracting scripts",
            TargetState::DispatchingChildren => "dispatching script fetches",
            TargetState::AwaitingChildren => "awaiting script fetches",
            TargetState::Cleaning => "cleaning",
            TargetState::Done => "done",
        })
    }
}

/// Result of processing one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Target URL as processed
    pub target: String,
    /// Whether the page itself was fetched
    pub page_fetched: bool,
    /// Distinct fetchable script URLs found on the page
    pub scripts_found: usize,
    /// Scripts that were fetched successfully
    pub scripts_fetched: usize,
    /// Cleaned paths for this target
    pub paths: Vec<String>,
}

impl TargetOutcome {
    fn empty(target: &str) -> Self {
        Self {
            target: target.to_string(),
            page_fetched: false,
            scripts_found: 0,
            scripts_fetched: 0,
            paths: Vec::new(),
        }
    }
}

/// Runs targets through the extraction pipeline.
///
/// The worker semaphore is shared by every target processed with the same
/// pipeline, so at most `workers` script fetches run at any time.
pub struct Pipeline {
    requester: Arc<dyn Requester>,
    extractor: Arc<dyn Extractor>,
    semaphore: Arc<Semaphore>,
    verify_ssl: bool,
    stats: Arc<ProcessingStats>,
}

impl Pipeline {
    /// Creates a pipeline with a pool of `workers` concurrent script fetches.
    pub fn new(capabilities: Capabilities, workers: usize, verify_ssl: bool) -> Self {
        Self {
            requester: capabilities.requester,
            extractor: capabilities.extractor,
            semaphore: init_semaphore(workers),
            verify_ssl,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Failure counters accumulated across all processed targets.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Fetches `target`, follows its scripts and returns the cleaned paths.
    ///
    /// Never fails: an unavailable page, unfetchable scripts and extraction
    /// panics all reduce to fewer (or no) paths.
    pub async fn process_target(&self, target: &str) -> TargetOutcome {
        let mut outcome = TargetOutcome::empty(target);
        let results = ResultSet::new();

        self.enter(target, TargetState::FetchingPage);
        let html = match self.requester.get(target, self.verify_ssl).await {
            FetchResult::Fetched { body, .. } => body,
            FetchResult::Absent(failure) => {
                self.stats.increment_failure(failure);
                warn!("Page unavailable ({failure}), nothing to extract: {target}");
                self.enter(target, TargetState::Done);
                return outcome;
            }
        };
        outcome.page_fetched = true;

        self.enter(target, TargetState::ExtractingScripts);
        let script_urls = self.script_urls(target, &html);
        outcome.scripts_found = script_urls.len();
        info!("Found {} script(s) on {target}", script_urls.len());
        self.scan_inline_scripts(target, &html, &results);

        self.enter(target, TargetState::DispatchingChildren);
        let mut tasks = FuturesUnordered::new();
        for script_url in script_urls {
            let permit = match Arc::clone(&self.semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    error!("Worker pool closed while dispatching scripts for {target}: {e}");
                    break;
                }
            };
            tasks.push(tokio::spawn(fetch_and_extract(ScriptTaskParams {
                script_url: script_url.into(),
                requester: Arc::clone(&self.requester),
                extractor: Arc::clone(&self.extractor),
                results: results.clone(),
                verify_ssl: self.verify_ssl,
                permit,
            })));
        }

        self.enter(target, TargetState::AwaitingChildren);
        while let Some(joined) = tasks.next().await {
            match joined {
                Ok(ScriptOutcome::Fetched(_)) => outcome.scripts_fetched += 1,
                Ok(ScriptOutcome::Absent(failure)) => self.stats.increment_failure(failure),
                Err(e) => {
                    warn!("Script task for {target} failed, contributing nothing: {e}");
                    self.stats.increment_task_failure();
                }
            }
        }

        self.enter(target, TargetState::Cleaning);
        outcome.paths = self.clean(target, &results.snapshot());

        self.enter(target, TargetState::Done);
        info!(
            "{target}: {} unique path(s) from {}/{} script(s)",
            outcome.paths.len(),
            outcome.scripts_fetched,
            outcome.scripts_found
        );
        outcome
    }

    /// Cleans an arbitrary set with this pipeline's extractor.
    pub fn clean(&self, context: &str, paths: &HashSet<String>) -> Vec<String> {
        self.guarded(context, "clean", || self.extractor.clean(paths))
            .unwrap_or_default()
    }

    /// Distinct absolute script URLs referenced by the page, in page order.
    fn script_urls(&self, target: &str, html: &[u8]) -> Vec<Url> {
        let base = match Url::parse(target) {
            Ok(base) => base,
            Err(e) => {
                warn!("Cannot resolve scripts against invalid target URL {target}: {e}");
                return Vec::new();
            }
        };

        let references = self
            .guarded(target, "extract_scripts", || self.extractor.extract_scripts(html))
            .unwrap_or_default();

        let mut seen = HashSet::new();
        references
            .iter()
            .filter_map(|reference| resolve_script_url(&base, reference))
            .filter(|url| seen.insert(url.clone()))
            .collect()
    }

    fn scan_inline_scripts(&self, target: &str, html: &[u8], results: &ResultSet) {
        let paths = self.guarded(target, "inline scripts", || {
            self.extractor
                .extract_inline_scripts(html)
                .iter()
                .flat_map(|body| self.extractor.extract_urls_from_js(body.as_bytes()))
                .collect::<Vec<_>>()
        });
        if let Some(paths) = paths {
            let added = results.merge(paths);
            debug!("{target}: {added} path(s) from inline scripts");
        }
    }

    /// Runs an extractor operation outside a task, turning a panic into `None`.
    fn guarded<T>(&self, target: &str, operation: &str, f: impl FnOnce() -> T) -> Option<T> {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Extractor panicked in {operation} for {target}, contributing nothing");
                self.stats.increment_task_failure();
                None
            }
        }
    }

    fn enter(&self, target: &str, state: TargetState) {
        debug!("{target}: {state}");
    }
}
