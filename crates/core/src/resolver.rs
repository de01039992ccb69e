//! Derivation of factory identifiers and resolution through a container.
//!
//! The two halves are deliberately separate: [`derive_factory_identifier`] is
//! a pure function over the namespace path, and [`resolve_factory`] adds a
//! single delegated container lookup. The resolver holds no state, performs no
//! caching, never retries, and never substitutes a default factory.

use std::sync::Arc;

use crate::container::FactoryContainer;
use crate::errors::{FactoryError, FactoryResult};
use crate::factory::ModelFactory;
use crate::namespace::{FactoryIdentifier, NamespacePath};

/// Derive the factory identifier for a model namespace.
///
/// Only the domain segment (index 1) and the final model segment take part;
/// interior segments are discarded regardless of nesting depth. Paths with
/// fewer than 2 segments violate the convention's precondition and fail with
/// [`FactoryError::MalformedNamespace`].
pub fn derive_factory_identifier(path: &NamespacePath) -> FactoryResult<FactoryIdentifier> {
    let (Some(domain), Some(model_name)) = (path.domain(), path.model_name()) else {
        return Err(FactoryError::malformed_namespace(path));
    };
    Ok(FactoryIdentifier::new(domain, model_name))
}

/// Derive the identifier for `path` and resolve it through `container`.
///
/// The bound instance is returned verbatim; whether repeated calls yield the
/// identical instance is the container's binding contract, not the resolver's.
pub fn resolve_factory(
    path: &NamespacePath,
    container: &dyn FactoryContainer,
) -> FactoryResult<Arc<dyn ModelFactory>> {
    let identifier = derive_factory_identifier(path)?;
    container.resolve(&identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_anchors_on_domain_and_model_segments() {
        let path = NamespacePath::parse("Domain::Sample::Models::SampleModel");

        let identifier = derive_factory_identifier(&path).unwrap();

        assert_eq!(
            identifier.as_str(),
            "Database.Factories.Sample.SampleModelFactory"
        );
    }

    #[test]
    fn interior_segments_do_not_affect_the_identifier() {
        let deep = NamespacePath::parse("Domain::Accounting::Reports::Models::Report");
        let shallow = NamespacePath::parse("Domain::Accounting::Models::Report");

        let from_deep = derive_factory_identifier(&deep).unwrap();
        let from_shallow = derive_factory_identifier(&shallow).unwrap();

        assert_eq!(from_deep, from_shallow);
        assert_eq!(
            from_deep.as_str(),
            "Database.Factories.Accounting.ReportFactory"
        );
    }

    #[test]
    fn minimum_length_path_derives_from_its_only_two_segments() {
        let path = NamespacePath::new(["Domain", "User"]);

        let identifier = derive_factory_identifier(&path).unwrap();

        assert_eq!(identifier.as_str(), "Database.Factories.User.UserFactory");
    }

    #[test]
    fn single_segment_path_is_malformed() {
        let path = NamespacePath::parse("Ghost");

        let error = derive_factory_identifier(&path).unwrap_err();

        assert!(error.is_malformed_namespace());
    }

    #[test]
    fn empty_path_is_malformed() {
        let path = NamespacePath::new(Vec::<String>::new());

        let error = derive_factory_identifier(&path).unwrap_err();

        assert!(error.is_malformed_namespace());
    }

    #[test]
    fn malformed_path_never_reaches_the_container() {
        struct PanickingContainer;

        impl FactoryContainer for PanickingContainer {
            fn resolve(
                &self,
                _identifier: &FactoryIdentifier,
            ) -> Result<Arc<dyn ModelFactory>, FactoryError> {
                panic!("container must not be consulted for a malformed path");
            }
        }

        let path = NamespacePath::parse("Ghost");

        let error = resolve_factory(&path, &PanickingContainer).unwrap_err();

        assert!(error.is_malformed_namespace());
    }
}
