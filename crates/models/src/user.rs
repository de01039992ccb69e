use chrono::{DateTime, Utc};
use fabriq_core::{HasFactory, NamespacePath};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account owner. The password field holds the already-hashed credential;
/// hashing itself is not this crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub email_verified_at: Option<DateTime<Utc>>,
}

impl HasFactory for User {
    fn namespace() -> NamespacePath {
        NamespacePath::parse("Domain::Shared::Models::User")
    }
}
