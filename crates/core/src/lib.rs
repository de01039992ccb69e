//! Convention-based factory resolution for fabriq domain models.
//!
//! Every domain model lives under a namespace like
//! `Domain::Accounting::Reports::Models::Report`, and its test-data factory is
//! located by convention rather than configuration: the second namespace
//! segment is the domain grouping, the last segment is the model name, and the
//! factory is looked up under
//! `Database.Factories.<Domain>.<ModelName>Factory`.
//!
//! The crate splits that into two pieces:
//!
//! - [`resolver::derive_factory_identifier`] — the pure naming rule, directly
//!   testable without any container in play.
//! - [`resolver::resolve_factory`] — derivation plus a single delegated lookup
//!   through a [`FactoryContainer`], which owns binding semantics and instance
//!   lifetime.
//!
//! Models opt in through [`HasFactory`], supplying their namespace as type
//! metadata. The container is always passed explicitly; there is no ambient
//! global registry.

pub mod container;
pub mod errors;
pub mod factory;
pub mod model;
pub mod namespace;
pub mod resolver;

pub use container::{FactoryContainer, FactoryRegistry};
pub use errors::{FactoryError, FactoryResult};
pub use factory::ModelFactory;
pub use model::HasFactory;
pub use namespace::{FactoryIdentifier, NamespacePath};
pub use resolver::{derive_factory_identifier, resolve_factory};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
