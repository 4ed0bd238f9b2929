//! Capability loading.
//!
//! Resolves the [`Requester`](crate::fetch::Requester) and
//! [`Extractor`](crate::parse::Extractor) used for a run:
//! - a registry of named factories, grouped by module (`builtin` ships with
//!   the crate; library users register their own)
//! - a conformance check on every freshly built instance
//! - a resolver that falls back to the default per capability, so a bad
//!   custom extractor never affects a good custom requester and never aborts
//!   the run

mod conformance;
mod loader;
mod registry;

// Re-export public API
pub use conformance::{check_extractor, check_requester};
pub use loader::{load_capabilities, Capabilities};
pub use registry::{CapabilityRegistry, ExtractorFactory, FactoryContext, RequesterFactory};
