//! Registry of named capability factories.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{
    BUILTIN_MODULE, DEFAULT_EXTRACTOR_NAME, DEFAULT_REQUESTER_NAME, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, ENDPOINT_EXTRACTOR_NAME,
};
use crate::error_handling::CapabilityError;
use crate::fetch::{DefaultRequester, Requester};
use crate::parse::{DefaultExtractor, EndpointExtractor, Extractor};

/// Settings passed to every factory.
#[derive(Debug, Clone)]
pub struct FactoryContext {
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for FactoryContext {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Builds a requester from the factory context.
pub type RequesterFactory =
    Arc<dyn Fn(&FactoryContext) -> Result<Arc<dyn Requester>, CapabilityError> + Send + Sync>;

/// Builds an extractor from the factory context.
pub type ExtractorFactory =
    Arc<dyn Fn(&FactoryContext) -> Result<Arc<dyn Extractor>, CapabilityError> + Send + Sync>;

#[derive(Clone, Default)]
struct Module {
    requesters: HashMap<String, RequesterFactory>,
    extractors: HashMap<String, ExtractorFactory>,
}

/// Capability factories grouped by module and keyed by type name.
///
/// `with_builtins()` registers the `builtin` module; library users add their
/// own modules before starting a run:
///
/// ```no_run
/// use std::sync::Arc;
/// use api_finder::capability::CapabilityRegistry;
/// use api_finder::parse::DefaultExtractor;
///
/// let mut registry = CapabilityRegistry::with_builtins();
/// registry.register_extractor("plugins", "MyExtractor", |_ctx| {
///     Ok(Arc::new(DefaultExtractor))
/// });
/// ```
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    modules: HashMap<String, Module>,
}

impl CapabilityRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the `builtin` module.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_requester(BUILTIN_MODULE, DEFAULT_REQUESTER_NAME, |ctx| {
            DefaultRequester::new(ctx.timeout, &ctx.user_agent)
                .map(|r| Arc::new(r) as Arc<dyn Requester>)
                .map_err(|e| CapabilityError::Instantiation {
                    name: DEFAULT_REQUESTER_NAME.to_string(),
                    reason: e.to_string(),
                })
        });
        registry.register_extractor(BUILTIN_MODULE, DEFAULT_EXTRACTOR_NAME, |_| {
            Ok(Arc::new(DefaultExtractor))
        });
        registry.register_extractor(BUILTIN_MODULE, ENDPOINT_EXTRACTOR_NAME, |_| {
            Ok(Arc::new(EndpointExtractor))
        });
        registry
    }

    /// Registers (or replaces) a requester factory.
    pub fn register_requester<F>(&mut self, module: &str, name: &str, factory: F)
    where
        F: Fn(&FactoryContext) -> Result<Arc<dyn Requester>, CapabilityError>
            + Send
            + Sync
            + 'static,
    {
        self.modules
            .entry(module.to_string())
            .or_default()
            .requesters
            .insert(name.to_string(), Arc::new(factory));
    }

    /// Registers (or replaces) an extractor factory.
    pub fn register_extractor<F>(&mut self, module: &str, name: &str, factory: F)
    where
        F: Fn(&FactoryContext) -> Result<Arc<dyn Extractor>, CapabilityError>
            + Send
            + Sync
            + 'static,
    {
        self.modules
            .entry(module.to_string())
            .or_default()
            .extractors
            .insert(name.to_string(), Arc::new(factory));
    }

    /// Whether any factory was registered under `module`.
    pub fn has_module(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Locates and instantiates a requester.
    ///
    /// # Errors
    ///
    /// `ModuleNotFound`, `TypeNotFound`, or `Instantiation` if the factory
    /// returns an error or panics.
    pub fn requester(
        &self,
        module: &str,
        name: &str,
        ctx: &FactoryContext,
    ) -> Result<Arc<dyn Requester>, CapabilityError> {
        let factory = self
            .module(module)?
            .requesters
            .get(name)
            .ok_or_else(|| CapabilityError::TypeNotFound {
                module: module.to_string(),
                name: name.to_string(),
                capability: "requester",
            })?;
        instantiate(name, || factory(ctx))
    }

    /// Locates and instantiates an extractor.
    ///
    /// # Errors
    ///
    /// Same as [`CapabilityRegistry::requester`].
    pub fn extractor(
        &self,
        module: &str,
        name: &str,
        ctx: &FactoryContext,
    ) -> Result<Arc<dyn Extractor>, CapabilityError> {
        let factory = self
            .module(module)?
            .extractors
            .get(name)
            .ok_or_else(|| CapabilityError::TypeNotFound {
                module: module.to_string(),
                name: name.to_string(),
                capability: "extractor",
            })?;
        instantiate(name, || factory(ctx))
    }

    fn module(&self, module: &str) -> Result<&Module, CapabilityError> {
        self.modules
            .get(module)
            .ok_or_else(|| CapabilityError::ModuleNotFound(module.to_string()))
    }
}

/// Runs a factory, turning a panic into an `Instantiation` error.
fn instantiate<T>(
    name: &str,
    factory: impl FnOnce() -> Result<T, CapabilityError>,
) -> Result<T, CapabilityError> {
    catch_unwind(AssertUnwindSafe(factory)).unwrap_or_else(|_| {
        Err(CapabilityError::Instantiation {
            name: name.to_string(),
            reason: "factory panicked".to_string(),
        })
    })
}
