use thiserror::Error;

use crate::namespace::{FactoryIdentifier, NamespacePath};

/// Errors produced by factory derivation and resolution.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The model namespace cannot satisfy the naming convention. This is a
    /// caller misconfiguration and is raised before any container lookup.
    #[error("Malformed model namespace '{path}': expected at least 2 segments, found {segments}")]
    MalformedNamespace { path: String, segments: usize },

    /// The derived identifier has neither a bound instance nor a registered
    /// constructor. The message carries the literal identifier so callers can
    /// diagnose which convention-derived key was missing.
    #[error("Unable to resolve '{identifier}': no factory bound and no concrete factory registered")]
    UnresolvedFactory { identifier: String },

    /// A registry lock was poisoned. Container-side only; the resolver passes
    /// it through unchanged.
    #[error("Lock error on resource: {resource}")]
    Lock { resource: String },
}

impl FactoryError {
    /// Create a malformed-namespace error for a path
    pub fn malformed_namespace(path: &NamespacePath) -> Self {
        Self::MalformedNamespace {
            path: path.to_string(),
            segments: path.len(),
        }
    }

    /// Create an unresolved-factory error for a derived identifier
    pub fn unresolved(identifier: &FactoryIdentifier) -> Self {
        Self::UnresolvedFactory {
            identifier: identifier.to_string(),
        }
    }

    /// Create a lock error for a registry resource
    pub fn lock(resource: impl Into<String>) -> Self {
        Self::Lock {
            resource: resource.into(),
        }
    }

    /// Check if the error is a malformed-namespace error
    pub fn is_malformed_namespace(&self) -> bool {
        matches!(self, Self::MalformedNamespace { .. })
    }

    /// Check if the error is an unresolved-factory error
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::UnresolvedFactory { .. })
    }
}

/// Result alias for factory operations
pub type FactoryResult<T> = Result<T, FactoryError>;
