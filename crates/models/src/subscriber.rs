use fabriq_core::{HasFactory, NamespacePath};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Newsletter subscriber, grouped under the `Subscriber` domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub form_id: Option<Uuid>,
    pub user_id: Uuid,
}

impl HasFactory for Subscriber {
    fn namespace() -> NamespacePath {
        NamespacePath::parse("Domain::Subscriber::Models::Subscriber")
    }
}
