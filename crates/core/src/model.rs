use std::sync::Arc;

use crate::container::FactoryContainer;
use crate::errors::FactoryResult;
use crate::factory::ModelFactory;
use crate::namespace::NamespacePath;
use crate::resolver::resolve_factory;

/// Implemented by model types that locate their test-data factory by
/// convention.
///
/// The namespace is type metadata the model exposes by construction, not
/// configuration. The container is passed explicitly at the call site so the
/// lookup carries no hidden global state.
pub trait HasFactory {
    /// Fully-qualified namespace location of the model type
    fn namespace() -> NamespacePath;

    /// Resolve this model's factory through `container`
    fn factory(container: &dyn FactoryContainer) -> FactoryResult<Arc<dyn ModelFactory>> {
        resolve_factory(&Self::namespace(), container)
    }
}
