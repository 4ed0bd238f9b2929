//! Requester capability: turning a URL into response bytes.
//!
//! A requester never fails across its interface. Every failure mode (invalid
//! URL, timeout, refused connection, certificate error, non-success status)
//! collapses into [`FetchResult::Absent`], which callers treat as "skip this
//! resource".

mod request;

use futures::future::BoxFuture;

use crate::error_handling::{CapabilityError, FetchFailure};

pub use request::DefaultRequester;

/// Outcome of a single HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Response body together with the URL it was requested from.
    Fetched {
        /// Requested URL
        url: String,
        /// Raw response body
        body: Vec<u8>,
    },
    /// No usable payload. The category is informational only.
    Absent(FetchFailure),
}

impl FetchResult {
    /// Returns the payload, or `None` for an absent result.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            FetchResult::Fetched { body, .. } => Some(body),
            FetchResult::Absent(_) => None,
        }
    }

    /// Whether the fetch produced no payload.
    pub fn is_absent(&self) -> bool {
        matches!(self, FetchResult::Absent(_))
    }
}

/// Fetches resources for the pipeline.
///
/// Implementations are shared across all worker tasks as `Arc<dyn Requester>`;
/// one that carries internal state must synchronize it itself.
pub trait Requester: Send + Sync {
    /// Fetches `url`, validating certificates only when `verify_ssl` is set.
    fn get<'a>(&'a self, url: &'a str, verify_ssl: bool) -> BoxFuture<'a, FetchResult>;

    /// Conformance hook run by the capability loader right after instantiation.
    ///
    /// The default accepts the instance; override it to reject a requester
    /// that was constructed but cannot serve requests.
    fn self_check(&self) -> Result<(), CapabilityError> {
        Ok(())
    }
}
