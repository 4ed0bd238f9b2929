//! Capability resolution with per-capability fallback.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use super::conformance::{check_extractor, check_requester};
use super::registry::{CapabilityRegistry, FactoryContext};
use crate::config::{Config, BUILTIN_MODULE};
use crate::error_handling::{CapabilityError, InitializationError};
use crate::fetch::{DefaultRequester, Requester};
use crate::parse::{DefaultExtractor, Extractor};

/// The resolved requester and extractor for a run.
#[derive(Clone)]
pub struct Capabilities {
    /// Shared requester
    pub requester: Arc<dyn Requester>,
    /// Shared extractor
    pub extractor: Arc<dyn Extractor>,
}

impl Capabilities {
    /// Built-in requester and extractor.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn defaults(ctx: &FactoryContext) -> Result<Self, InitializationError> {
        Ok(Self {
            requester: default_requester(ctx)?,
            extractor: Arc::new(DefaultExtractor),
        })
    }
}

/// Resolves the requester and extractor named in `config`.
///
/// A type name without `custom_module` is looked up in the `builtin` module.
/// Each capability falls back to its default independently: if the module or
/// type is missing, the factory fails, or the instance fails its conformance
/// check, the failure is logged and the default is used. A custom requester
/// that loads fine is kept even when the custom extractor falls back, and
/// vice versa.
///
/// # Errors
///
/// Only if the default requester's HTTP client cannot be built.
pub fn load_capabilities(
    registry: &CapabilityRegistry,
    config: &Config,
) -> Result<Capabilities, InitializationError> {
    let ctx = FactoryContext {
        timeout: Duration::from_secs(config.timeout_seconds),
        user_agent: config.user_agent.clone(),
    };
    let module = config.custom_module.as_deref().unwrap_or(BUILTIN_MODULE);

    let requester = match config.request_name.as_deref() {
        Some(name) => match resolve_requester(registry, module, name, &ctx) {
            Ok(requester) => {
                info!("Using custom requester: {module}::{name}");
                requester
            }
            Err(e) => {
                warn!("Failed to load custom requester ({module}::{name}): {e}, using default");
                default_requester(&ctx)?
            }
        },
        None => default_requester(&ctx)?,
    };

    let extractor = match config.parsed_name.as_deref() {
        Some(name) => match resolve_extractor(registry, module, name, &ctx) {
            Ok(extractor) => {
                info!("Using custom extractor: {module}::{name}");
                extractor
            }
            Err(e) => {
                warn!("Failed to load custom extractor ({module}::{name}): {e}, using default");
                Arc::new(DefaultExtractor)
            }
        },
        None => Arc::new(DefaultExtractor),
    };

    Ok(Capabilities {
        requester,
        extractor,
    })
}

fn resolve_requester(
    registry: &CapabilityRegistry,
    module: &str,
    name: &str,
    ctx: &FactoryContext,
) -> Result<Arc<dyn Requester>, CapabilityError> {
    let requester = registry.requester(module, name, ctx)?;
    check_requester(name, requester.as_ref())?;
    Ok(requester)
}

fn resolve_extractor(
    registry: &CapabilityRegistry,
    module: &str,
    name: &str,
    ctx: &FactoryContext,
) -> Result<Arc<dyn Extractor>, CapabilityError> {
    let extractor = registry.extractor(module, name, ctx)?;
    check_extractor(name, extractor.as_ref())?;
    Ok(extractor)
}

fn default_requester(ctx: &FactoryContext) -> Result<Arc<dyn Requester>, InitializationError> {
    Ok(Arc::new(DefaultRequester::new(ctx.timeout, &ctx.user_agent)?))
}
