//! Per-script task: fetch a script and merge its endpoints.

use std::sync::Arc;

use log::debug;
use tokio::sync::OwnedSemaphorePermit;

use super::results::ResultSet;
use crate::error_handling::FetchFailure;
use crate::fetch::{FetchResult, Requester};
use crate::parse::Extractor;

/// Everything one script task needs. Owned, so the task can be spawned.
pub(crate) struct ScriptTaskParams {
    pub script_url: String,
    pub requester: Arc<dyn Requester>,
    pub extractor: Arc<dyn Extractor>,
    pub results: ResultSet,
    pub verify_ssl: bool,
    pub permit: OwnedSemaphorePermit,
}

/// What a finished script task reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScriptOutcome {
    /// Script fetched; carries the number of paths new to the target's set
    Fetched(usize),
    /// Script could not be fetched
    Absent(FetchFailure),
}

/// Fetches one script and merges the paths it contains.
///
/// Runs as a spawned Tokio task holding one worker permit until it returns.
/// A panic in here surfaces as a `JoinError` to the pipeline, which treats it
/// as an empty contribution.
pub(crate) async fn fetch_and_extract(params: ScriptTaskParams) -> ScriptOutcome {
    let ScriptTaskParams {
        script_url,
        requester,
        extractor,
        results,
        verify_ssl,
        permit: _permit, // Hold permit until task completes
    } = params;

    match requester.get(&script_url, verify_ssl).await {
        FetchResult::Fetched { body, .. } => {
            let paths = extractor.extract_urls_from_js(&body);
            let found = paths.len();
            let added = results.merge(paths);
            debug!("{script_url}: {found} paths extracted, {added} new");
            ScriptOutcome::Fetched(added)
        }
        FetchResult::Absent(failure) => ScriptOutcome::Absent(failure),
    }
}
