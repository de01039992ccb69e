use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::container::FactoryContainer;
use crate::errors::{FactoryError, FactoryResult};
use crate::factory::ModelFactory;
use crate::namespace::FactoryIdentifier;

/// Constructor registered for the concrete-factory fallback path.
pub type FactoryConstructor = Box<dyn Fn() -> Arc<dyn ModelFactory> + Send + Sync>;

/// String-keyed registry of factory bindings.
///
/// Two binding kinds, resolved in order:
///
/// 1. an instance binding — the bound `Arc` is returned verbatim on every
///    resolution, so repeated lookups are identity-equal;
/// 2. a constructor binding — the registry's explicit form of "a concrete
///    type with this name exists": each resolution instantiates a fresh
///    factory.
///
/// An identifier with neither yields [`FactoryError::UnresolvedFactory`].
#[derive(Default)]
pub struct FactoryRegistry {
    instances: RwLock<HashMap<FactoryIdentifier, Arc<dyn ModelFactory>>>,
    constructors: RwLock<HashMap<FactoryIdentifier, FactoryConstructor>>,
}

impl FactoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an identifier to a factory instance
    ///
    /// The same instance is handed out on every resolution. Rebinding an
    /// identifier replaces the previous instance.
    pub fn bind_instance(
        &self,
        identifier: impl Into<FactoryIdentifier>,
        factory: Arc<dyn ModelFactory>,
    ) -> FactoryResult<()> {
        let identifier = identifier.into();
        let mut instances = self
            .instances
            .write()
            .map_err(|_| FactoryError::lock("factory_instances"))?;

        debug!(identifier = %identifier, "binding factory instance");
        instances.insert(identifier, factory);
        Ok(())
    }

    /// Register a constructor for an identifier
    ///
    /// Stands in for "a concrete type matching this identifier exists": when
    /// no instance is bound, resolution calls the constructor for a fresh
    /// factory each time.
    pub fn bind_constructor<F>(
        &self,
        identifier: impl Into<FactoryIdentifier>,
        constructor: F,
    ) -> FactoryResult<()>
    where
        F: Fn() -> Arc<dyn ModelFactory> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let mut constructors = self
            .constructors
            .write()
            .map_err(|_| FactoryError::lock("factory_constructors"))?;

        debug!(identifier = %identifier, "registering factory constructor");
        constructors.insert(identifier, Box::new(constructor));
        Ok(())
    }

    /// Check if the identifier has any binding
    pub fn contains(&self, identifier: &FactoryIdentifier) -> bool {
        self.has_instance(identifier) || self.has_concrete(identifier)
    }

    /// Check if the identifier has a bound instance
    pub fn has_instance(&self, identifier: &FactoryIdentifier) -> bool {
        self.instances
            .read()
            .map(|instances| instances.contains_key(identifier))
            .unwrap_or(false)
    }

    /// Check if a concrete factory constructor is registered for the identifier
    pub fn has_concrete(&self, identifier: &FactoryIdentifier) -> bool {
        self.constructors
            .read()
            .map(|constructors| constructors.contains_key(identifier))
            .unwrap_or(false)
    }

    /// Instantiate a fresh factory from the identifier's registered constructor
    pub fn instantiate(
        &self,
        identifier: &FactoryIdentifier,
    ) -> FactoryResult<Arc<dyn ModelFactory>> {
        let constructors = self
            .constructors
            .read()
            .map_err(|_| FactoryError::lock("factory_constructors"))?;

        match constructors.get(identifier) {
            Some(constructor) => {
                debug!(identifier = %identifier, "instantiating factory from constructor");
                Ok(constructor())
            }
            None => Err(FactoryError::unresolved(identifier)),
        }
    }

    /// Number of bindings of both kinds
    pub fn binding_count(&self) -> usize {
        let instances = self
            .instances
            .read()
            .map(|instances| instances.len())
            .unwrap_or(0);
        let constructors = self
            .constructors
            .read()
            .map(|constructors| constructors.len())
            .unwrap_or(0);
        instances + constructors
    }
}

impl FactoryContainer for FactoryRegistry {
    fn resolve(
        &self,
        identifier: &FactoryIdentifier,
    ) -> Result<Arc<dyn ModelFactory>, FactoryError> {
        let instances = self
            .instances
            .read()
            .map_err(|_| FactoryError::lock("factory_instances"))?;

        // Clone the Arc itself, not the factory - the bound instance is
        // returned verbatim.
        if let Some(factory) = instances.get(identifier) {
            return Ok(Arc::clone(factory));
        }
        drop(instances);

        if self.has_concrete(identifier) {
            return self.instantiate(identifier);
        }

        Err(FactoryError::unresolved(identifier))
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("binding_count", &self.binding_count())
            .finish()
    }
}
