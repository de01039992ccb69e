use fabriq_core::{HasFactory, NamespacePath};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label a user attaches to subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
}

impl HasFactory for Tag {
    fn namespace() -> NamespacePath {
        NamespacePath::parse("Domain::Subscriber::Models::Tag")
    }
}
