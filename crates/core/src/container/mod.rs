pub mod registry;

pub use registry::{FactoryConstructor, FactoryRegistry};

use std::sync::Arc;

use crate::errors::FactoryError;
use crate::factory::ModelFactory;
use crate::namespace::FactoryIdentifier;

/// Capability consumed by the resolver: produce the factory instance bound to
/// a derived identifier.
///
/// Implementations own binding semantics and instance lifetime. A singleton
/// binding must return the identical instance on every call; a
/// constructor-backed binding may return a fresh instance each time. The
/// not-found failure must carry the identifier string.
pub trait FactoryContainer: Send + Sync {
    /// Resolve the factory bound to `identifier`
    fn resolve(&self, identifier: &FactoryIdentifier)
        -> Result<Arc<dyn ModelFactory>, FactoryError>;
}
