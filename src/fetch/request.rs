//! Default requester backed by `reqwest`.

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use log::{info, warn};
use reqwest::Url;

use super::{FetchResult, Requester};
use crate::error_handling::{categorize_reqwest_error, FetchFailure, InitializationError};
use crate::initialization::init_client;

/// Built-in requester.
///
/// Holds one client per TLS policy so a call can pick strict or permissive
/// certificate handling without rebuilding a client. Non-success statuses are
/// treated like transport errors: the result is absent.
#[derive(Debug, Clone)]
pub struct DefaultRequester {
    strict: reqwest::Client,
    permissive: reqwest::Client,
}

impl DefaultRequester {
    /// Builds both clients with the given timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if a client cannot be built.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, InitializationError> {
        Ok(Self {
            strict: init_client(timeout, user_agent, true)?,
            permissive: init_client(timeout, user_agent, false)?,
        })
    }

    async fn fetch(&self, url: &str, verify_ssl: bool) -> FetchResult {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Request failed: {url} -> invalid URL: {e}");
                return FetchResult::Absent(FetchFailure::InvalidUrl);
            }
        };

        let client = if verify_ssl {
            &self.strict
        } else {
            &self.permissive
        };

        let response = match client
            .get(parsed)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(response) => response,
            Err(e) => {
                let failure = categorize_reqwest_error(&e);
                warn!("Request failed: {url} -> {failure}: {e}");
                return FetchResult::Absent(failure);
            }
        };

        match response.bytes().await {
            Ok(body) => {
                info!("Downloaded: {url}");
                FetchResult::Fetched {
                    url: url.to_string(),
                    body: body.to_vec(),
                }
            }
            Err(e) => {
                let failure = categorize_reqwest_error(&e);
                warn!("Failed to read body: {url} -> {e}");
                FetchResult::Absent(failure)
            }
        }
    }
}

impl Requester for DefaultRequester {
    fn get<'a>(&'a self, url: &'a str, verify_ssl: bool) -> BoxFuture<'a, FetchResult> {
        self.fetch(url, verify_ssl).boxed()
    }
}
