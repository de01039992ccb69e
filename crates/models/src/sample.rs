use fabriq_core::{HasFactory, NamespacePath};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal model used to exercise the factory convention end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleModel {
    pub id: Uuid,
    pub label: String,
}

impl HasFactory for SampleModel {
    fn namespace() -> NamespacePath {
        NamespacePath::parse("Domain::Sample::Models::SampleModel")
    }
}
